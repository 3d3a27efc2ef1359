//! Column justification helpers for plain-text tables

/// Pads every string on the right so all are as wide as the widest one.
pub fn ljust<S: AsRef<str>>(column: &[S]) -> Vec<String> {
    let width = max_width(column);
    column
        .iter()
        .map(|s| format!("{:<width$}", s.as_ref(), width = width))
        .collect()
}

/// Pads every string on the left so all are as wide as the widest one.
pub fn rjust<S: AsRef<str>>(column: &[S]) -> Vec<String> {
    let width = max_width(column);
    column
        .iter()
        .map(|s| format!("{:>width$}", s.as_ref(), width = width))
        .collect()
}

// Width is counted in chars, which is what `format!` padding uses.
fn max_width<S: AsRef<str>>(column: &[S]) -> usize {
    column
        .iter()
        .map(|s| s.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}
