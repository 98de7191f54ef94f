//! Custom field validators used with `validator::Validate` derives.

use std::borrow::Cow;

use validator::ValidationError;

/// Reject strings that are empty or whitespace only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// `level` must lie in `1..=max_level`.
pub fn level_in_range(level: i32, max_level: i32) -> Result<(), ValidationError> {
    if max_level < 1 || level < 1 || level > max_level {
        let mut err = ValidationError::new("level_range");
        err.message = Some(Cow::Owned(format!(
            "Level must be between 1 and {max_level}"
        )));
        return Err(err);
    }
    Ok(())
}

/// Stored rich-text documents must pass [`crate::rich_text::validate`].
pub fn rich_text_doc(value: &serde_json::Value) -> Result<(), ValidationError> {
    crate::rich_text::validate(value).map_err(|e| {
        let mut err = ValidationError::new("rich_text");
        err.message = Some(Cow::Owned(match e {
            crate::error::CoreError::Validation(msg) => msg,
            other => other.to_string(),
        }));
        err
    })
}

/// Flatten a `ValidationErrors` tree into `field -> first message`.
///
/// Field names are converted to camelCase to match the JSON payloads.
pub fn field_messages(errors: &validator::ValidationErrors) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", e.code));
                (to_camel_case(&field), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
