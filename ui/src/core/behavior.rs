//! Small page behaviors: header shadow, mobile menu, in-page anchors.

/// Whether the header should carry its scrolled shadow at `offset` px.
pub fn header_is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Element id targeted by a same-page anchor (`"#services"` -> `"services"`).
/// A bare `"#"` and external links have no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_destination(target_top: f64, page_offset: f64, header_height: f64) -> f64 {
    target_top + page_offset - header_height
}

/// Open/closed state of the mobile navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    /// Modifier class shared by the button and the nav.
    pub fn active_class(self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }

    /// Body scrolling is locked while the menu covers the page.
    pub fn locks_body_scroll(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shadow_starts_past_threshold() {
        assert!(!header_is_scrolled(0.0, 50.0));
        assert!(!header_is_scrolled(50.0, 50.0));
        assert!(header_is_scrolled(50.5, 50.0));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://wa.me/20100"), None);
        assert_eq!(scroll_destination(400.0, 1200.0, 80.0), 1520.0);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());

        let open = menu.toggle();
        assert!(open.is_open() && open.locks_body_scroll());
        assert_eq!(open.active_class(), "active");

        assert_eq!(open.close(), MenuState::default());
        assert_eq!(open.toggle(), MenuState::default());
        assert_eq!(menu.close(), menu);
    }
}
