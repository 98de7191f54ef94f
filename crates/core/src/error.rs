use crate::types::DbId;

/// Domain failures. The HTTP layer maps each variant to a status code and
/// uses the display string as the envelope message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Lookup by a natural key (slug, preset name, category value).
    #[error("{entity} '{key}' not found")]
    NotFoundBy { entity: &'static str, key: String },

    /// Rejected input; the message is shown to the admin as-is.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity() {
        let id = uuid::Uuid::nil();
        let err = CoreError::NotFound { entity: "Post", id };
        assert_eq!(err.to_string(), format!("Post with id {id} not found"));

        let err = CoreError::NotFoundBy {
            entity: "Theme",
            key: "ocean".into(),
        };
        assert_eq!(err.to_string(), "Theme 'ocean' not found");
    }
}
