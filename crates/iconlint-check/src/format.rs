//! List formatting for diagnostic messages

/// Join items with `", "`, truncating after `max` items.
///
/// A truncated list ends with `"... (N more)"`.
pub fn format_list<S: AsRef<str>>(items: &[S], max: Option<usize>) -> String {
    let shown = match max {
        Some(max) if items.len() > max => max,
        _ => items.len(),
    };

    let mut out = items[..shown]
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    if shown < items.len() {
        out.push_str(&format!("... ({} more)", items.len() - shown));
    }
    out
}
