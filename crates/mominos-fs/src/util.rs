/// Convert a path to the smallest possible representation
/// This is done by handling shortcuts like `..` and `.` in the path
pub fn normalize_path(path: &str) -> String {
    let mut parts = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => continue,
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    format!("/{}", parts.join("/"))
}

/// Join a relative path onto a base directory and normalize the result.
/// Absolute paths replace the base.
pub fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        normalize_path(path)
    } else {
        normalize_path(&format!("{}/{}", base, path))
    }
}

/// Split a normalized path into its directory part and its final name
pub fn split_name_path(path: &str) -> (String, String) {
    let normalized = normalize_path(path);
    match normalized.rsplit_once('/') {
        Some((dir, name)) if !dir.is_empty() => (dir.to_string(), name.to_string()),
        Some((_, name)) => ("/".to_string(), name.to_string()),
        None => ("/".to_string(), normalized),
    }
}

/// The lowercase extension of a file name, if it has one
pub fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    // dotfiles like `.gitignore` have no extension
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
