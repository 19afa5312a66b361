use std::path::Path;
use uuid::Uuid;

const MAX_EXTENSION_LEN: usize = 16;

/// Extension of `original`, lowercased, if it is short and purely
/// alphanumeric. Anything else is dropped.
pub fn sanitized_extension(original: &str) -> Option<String> {
    let ext = Path::new(original).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Name a file is stored under: a time-ordered UUID plus the original's
/// sanitized extension. Nothing else from the client's name is kept.
pub fn stored_name(original: Option<&str>) -> String {
    let stem = Uuid::now_v7().simple().to_string();
    match original.and_then(sanitized_extension) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}
