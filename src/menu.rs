/// Above this viewport width the collapsed menu layout no longer applies.
pub const DEFAULT_MENU_BREAKPOINT_PX: u32 = 768;

/// Open/closed state of the small-viewport navigation menu. Every operation is
/// an idempotent no-op when the menu is already in the target state.
pub struct ResponsiveMenu {
    open: bool,
    breakpoint_px: u32,
}

impl ResponsiveMenu {
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            open: false,
            breakpoint_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click outside the navigation container dismisses an open menu.
    pub fn close_if_outside(&mut self, target_within_nav: bool) {
        if self.open && !target_within_nav {
            self.open = false;
        }
    }

    /// Growing past the breakpoint dismisses an open menu.
    pub fn close_if_wide(&mut self, viewport_width_px: u32) {
        if self.open && viewport_width_px > self.breakpoint_px {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> ResponsiveMenu {
        ResponsiveMenu::new(DEFAULT_MENU_BREAKPOINT_PX)
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut m = menu();
        m.toggle();
        assert!(m.is_open());
        m.toggle();
        assert!(!m.is_open());
    }

    #[test]
    fn wide_viewport_closes_only_an_open_menu() {
        let mut m = menu();
        m.close_if_wide(1024);
        assert!(!m.is_open());

        m.toggle();
        m.close_if_wide(1024);
        assert!(!m.is_open());
    }

    #[test]
    fn narrow_viewport_leaves_menu_open() {
        let mut m = menu();
        m.toggle();
        m.close_if_wide(480);
        assert!(m.is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut m = menu();
        m.toggle();
        m.close_if_outside(true);
        assert!(m.is_open());
        m.close_if_outside(false);
        assert!(!m.is_open());
        m.close_if_outside(false);
        assert!(!m.is_open());
    }
}
