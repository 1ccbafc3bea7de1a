use crate::loader::ContainerContent;
use crate::menu::ResponsiveMenu;
use crate::nav::{NavEntry, ScrollTarget, Section, SectionRouter};
use crate::theme::{Theme, ThemeController, ThemeStore};

/// The site's fixed page structure: one nav entry per section, in declaration
/// order. The first entry is the one startup activates.
pub fn default_nav() -> (Vec<NavEntry>, Vec<Section>) {
    let entries = vec![
        NavEntry::new("about", "About"),
        NavEntry::new("blog", "Blog"),
        NavEntry::new("projects", "Projects"),
        NavEntry::new("contact", "Contact"),
    ];
    let sections = vec![
        Section::new("about"),
        Section::new("blog"),
        Section::new("projects"),
        Section::new("contact"),
    ];
    (entries, sections)
}

/// The assembled page: theme, navigation, menu, and the two feed containers.
/// Methods correspond to the user events the live page reacts to.
pub struct Page<S: ThemeStore> {
    pub theme: ThemeController<S>,
    pub router: SectionRouter,
    pub menu: ResponsiveMenu,
    pub blog: ContainerContent,
    pub projects: ContainerContent,
}

impl<S: ThemeStore> Page<S> {
    /// Applies the persisted theme (already done by the controller) and
    /// activates the requested entry, or the first declared one, through the
    /// same path as a real nav click.
    pub fn startup(&mut self, entry_id: Option<&str>) -> anyhow::Result<ScrollTarget> {
        let id = match entry_id {
            Some(id) => id.to_string(),
            None => self.router.first_entry_id().to_string(),
        };
        self.click_nav(&id)
    }

    /// Nav click: move the active slot, then close the menu if it was open.
    pub fn click_nav(&mut self, entry_id: &str) -> anyhow::Result<ScrollTarget> {
        let target = self.router.activate(entry_id)?;
        self.menu.close();
        Ok(target)
    }

    pub fn click_theme_toggle(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn click_menu_toggle(&mut self) {
        self.menu.toggle();
    }

    pub fn document_click(&mut self, target_within_nav: bool) {
        self.menu.close_if_outside(target_within_nav);
    }

    pub fn viewport_resized(&mut self, width_px: u32) {
        self.menu.close_if_wide(width_px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::DEFAULT_MENU_BREAKPOINT_PX;
    use crate::nav::DEFAULT_HEADER_OFFSET_PX;
    use crate::theme::MemoryThemeStore;

    fn page() -> Page<MemoryThemeStore> {
        let (entries, sections) = default_nav();
        Page {
            theme: ThemeController::initialize(MemoryThemeStore::default()),
            router: SectionRouter::new(entries, sections, DEFAULT_HEADER_OFFSET_PX).unwrap(),
            menu: ResponsiveMenu::new(DEFAULT_MENU_BREAKPOINT_PX),
            blog: ContainerContent::Fallback("blog unavailable"),
            projects: ContainerContent::Fallback("projects unavailable"),
        }
    }

    #[test]
    fn startup_activates_first_entry() {
        let mut p = page();
        let target = p.startup(None).unwrap();
        assert_eq!(target.section_id, "about");
        assert_eq!(p.router.active_entry().unwrap().id, "about");
        assert_eq!(p.theme.current(), Theme::Light);
    }

    #[test]
    fn startup_twice_matches_startup_once() {
        let mut p = page();
        let first = p.startup(None).unwrap();
        let second = p.startup(None).unwrap();
        assert_eq!(first, second);
        assert_eq!(p.router.active_entry().unwrap().id, "about");
        assert_eq!(p.theme.current(), Theme::Light);
        assert!(!p.menu.is_open());
    }

    #[test]
    fn nav_click_closes_open_menu() {
        let mut p = page();
        p.startup(None).unwrap();
        p.click_menu_toggle();
        assert!(p.menu.is_open());
        p.click_nav("projects").unwrap();
        assert!(!p.menu.is_open());
        assert_eq!(p.router.active_section().unwrap().id, "projects");
    }

    #[test]
    fn theme_toggle_is_independent_of_navigation() {
        let mut p = page();
        p.startup(None).unwrap();
        assert_eq!(p.click_theme_toggle(), Theme::Dark);
        assert_eq!(p.router.active_entry().unwrap().id, "about");
    }
}
