pub fn header_shrunk(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Selector of the in-page target for an anchor `href`, if there is one.
/// A bare `#` points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

pub fn scroll_destination(target_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    target_top + page_y_offset - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shrinks_strictly_past_threshold() {
        assert!(!header_shrunk(0.0, 100.0));
        assert!(!header_shrunk(100.0, 100.0));
        assert!(header_shrunk(100.5, 100.0));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#services"), Some("#services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn destination_accounts_for_header() {
        assert_eq!(scroll_destination(400.0, 1200.0, 80.0), 1520.0);
        assert_eq!(scroll_destination(-300.0, 1200.0, 80.0), 820.0);
    }
}
