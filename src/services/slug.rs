use crate::error::{FolioError, FolioResult};

/// Derives the URL identifier for a title.
///
/// Lowercases, turns each space into `-` and drops anything that is not an
/// ASCII word character or `-`. Runs of spaces are not collapsed and no
/// trimming happens, so `"a  b"` becomes `"a--b"`.
pub fn generate_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

/// Slug for a record title. A title with no letter, digit, space, `_` or
/// `-` would leave the slug empty and is rejected.
pub fn slug_for_title(title: &str) -> FolioResult<String> {
    let slug = generate_slug(title);
    if slug.is_empty() {
        return Err(FolioError::validation(
            "Title must contain at least one letter or digit",
        ));
    }
    Ok(slug)
}
