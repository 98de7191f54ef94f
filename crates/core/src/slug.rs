//! URL slug generation for posts.

/// Turn a title into a lowercase, hyphen-separated ASCII slug.
///
/// Polish diacritics are folded to their base letters. Any other
/// non-alphanumeric run collapses into a single hyphen.
///
/// ```
/// use folio_core::slug::slugify;
///
/// assert_eq!(slugify("Zażółć gęślą jaźń!"), "zazolc-gesla-jazn");
/// assert_eq!(slugify("  Rust & Axum  "), "rust-axum");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        let ch = fold_polish(ch);
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "post".to_string()
    } else {
        slug
    }
}

fn fold_polish(ch: char) -> char {
    match ch {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ó' => 'o',
        'ś' => 's',
        'ź' | 'ż' => 'z',
        other => other,
    }
}

/// Find the first free slug: `base`, then `base-1`, `base-2`, ...
///
/// `exists` reports whether a candidate is already taken.
pub fn unique_slug(base: &str, mut exists: impl FnMut(&str) -> bool) -> String {
    if !exists(base) {
        return base.to_string();
    }
    let mut counter = 1u32;
    loop {
        let candidate = format!("{base}-{counter}");
        if !exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Clean up user-entered hashtags: trim, drop a leading `#`, skip empties
/// and repeats. Input order is kept.
pub fn normalize_hashtags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().trim_start_matches('#').trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
