/// How far above a section's top the reader may be while it already counts
/// as the current section.
pub const ACTIVE_SECTION_LEAD: i32 = 100;

/// The section the reader is in: the last one whose top, less
/// [`ACTIVE_SECTION_LEAD`], has been scrolled past. Offsets are expected in
/// page order.
pub fn active_section(offsets: &[(String, i32)], scroll_y: i32) -> Option<&str> {
    offsets
        .iter()
        .rev()
        .find(|(_, top)| scroll_y >= top - ACTIVE_SECTION_LEAD)
        .map(|(key, _)| key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<(String, i32)> {
        vec![
            ("about".to_string(), 600),
            ("projects".to_string(), 1200),
            ("skills".to_string(), 2000),
        ]
    }

    #[test]
    fn test_above_first_section() {
        assert_eq!(active_section(&page(), 0), None);
        assert_eq!(active_section(&page(), 499), None);
    }

    #[test]
    fn test_lead_counts_towards_section() {
        assert_eq!(active_section(&page(), 500), Some("about"));
        assert_eq!(active_section(&page(), 1100), Some("projects"));
    }

    #[test]
    fn test_past_last_section() {
        assert_eq!(active_section(&page(), 10_000), Some("skills"));
    }

    #[test]
    fn test_no_sections() {
        assert_eq!(active_section(&[], 300), None);
    }
}
