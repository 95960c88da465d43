/// Whether the navbar should be drawn elevated at this scroll offset.
pub fn is_elevated(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Selector for an in-page link target, `None` for a bare `#` or any other href.
pub fn fragment_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}
