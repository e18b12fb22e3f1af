//! Resolution of file-picker values to local paths.

use std::path::PathBuf;

/// Turn a path or `file://` URL into a local path.
///
/// Returns `None` for empty input and for URLs with a non-file scheme.
/// Percent escapes in `file://` URLs are decoded.
pub fn resolve_local_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let Some(scheme_end) = raw.find("://") else {
        return Some(PathBuf::from(raw));
    };

    let scheme = raw[..scheme_end].to_lowercase();
    if scheme != "file" {
        return None;
    }

    // file://host/path keeps only the path; file:///path has an empty host.
    let rest = &raw[scheme_end + 3..];
    let path = match rest.find('/') {
        Some(i) => &rest[i..],
        None => return None,
    };

    let decoded = percent_decode(path);
    if decoded.is_empty() {
        None
    } else {
        Some(PathBuf::from(decoded))
    }
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|h| u8::from_str_radix(h, 16).ok());
            if let Some(b) = hex {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths() {
        assert_eq!(resolve_local_path("data.csv"), Some(PathBuf::from("data.csv")));
        assert_eq!(
            resolve_local_path("/tmp/data.csv"),
            Some(PathBuf::from("/tmp/data.csv"))
        );
        assert_eq!(resolve_local_path("   "), None);
    }

    #[test]
    fn test_file_urls() {
        assert_eq!(
            resolve_local_path("file:///tmp/my%20data.csv"),
            Some(PathBuf::from("/tmp/my data.csv"))
        );
        assert_eq!(
            resolve_local_path("FILE://localhost/tmp/a.csv"),
            Some(PathBuf::from("/tmp/a.csv"))
        );
    }

    #[test]
    fn test_other_schemes_are_rejected() {
        assert_eq!(resolve_local_path("https://example.com/a.csv"), None);
        assert_eq!(resolve_local_path("file://"), None);
    }

    #[test]
    fn test_bad_escape_is_kept() {
        assert_eq!(
            resolve_local_path("file:///tmp/100%.csv"),
            Some(PathBuf::from("/tmp/100%.csv"))
        );
    }
}
