/// Returns the extension of the final segment of `path`, including the
/// leading dot, or an empty string when the segment has no dot.
///
/// Only the last dot counts: `archive.tar.gz` yields `.gz`. A dotfile such
/// as `.gitignore` yields the whole segment.
pub fn file_extension(path: &str) -> &str {
    for (i, b) in path.bytes().enumerate().rev() {
        match b {
            b'/' => break,
            b'.' => return &path[i..],
            _ => {}
        }
    }
    ""
}

/// Classification key for a path, e.g. `*.png` for `assets/logo.png`.
///
/// Returns `None` for paths without an extension.
pub fn qualifier(path: &str) -> Option<String> {
    let qualifier = format!("*{}", file_extension(path));
    (qualifier.len() > 1).then_some(qualifier)
}
