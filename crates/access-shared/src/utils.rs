//! Utility functions

/// Canonical form of a navigation path: no query or fragment, a single leading
/// slash, no duplicate or trailing slashes, `.` and `..` resolved (never above
/// the root). The empty path becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Non-empty segments of a path, after normalization.
pub fn path_segments(path: &str) -> Vec<String> {
    normalize_path(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when `path` equals `prefix` or continues it on a segment boundary,
/// so `/auth` covers `/auth/login` but not `/authors`.
pub fn has_path_prefix(path: &str, prefix: &str) -> bool {
    let path = normalize_path(path);
    let prefix = normalize_path(prefix);
    if prefix == "/" {
        return true;
    }
    path == prefix || path.starts_with(&format!("{}/", prefix))
}

pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let visible: String = local.chars().take(keep).collect();
            format!("{}***@{}", visible, domain)
        }
        _ => "***".to_string(),
    }
}
