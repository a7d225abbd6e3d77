// Screen navigation state machine (pure, no egui types)

/// Top-level screen being displayed
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Screen {
    Home,
    List,
    Detail,
}

/// Navigation request emitted by a screen in response to user input
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NavAction {
    /// Home's ready button: show the component list
    OpenList,
    /// A list card was activated: show the detail screen for this entry
    OpenDetail(&'static str),
    /// Back icon or Escape
    Back,
}

/// The single navigation state container.
///
/// Screens never flip the current screen themselves; they return a
/// `NavAction` and the update loop applies it here.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub screen: Screen,
    /// Title of the most recently activated list entry. Empty until the
    /// first card activation; survives back transitions.
    pub selected_component: String,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            selected_component: String::new(),
        }
    }

    /// Apply a navigation action. Pairs with no edge from the current
    /// screen are ignored.
    pub fn apply(&mut self, action: NavAction) {
        match (self.screen, action) {
            (Screen::Home, NavAction::OpenList) => self.screen = Screen::List,
            (Screen::List, NavAction::OpenDetail(title)) => {
                self.selected_component = title.to_string();
                self.screen = Screen::Detail;
            }
            (Screen::List, NavAction::Back) => self.screen = Screen::Home,
            (Screen::Detail, NavAction::Back) => self.screen = Screen::List,
            // No other edges: Back on Home, OpenList outside Home and
            // OpenDetail outside List all stay put.
            _ => {}
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::ENTRIES;

    #[test]
    fn starts_on_home_with_no_selection() {
        let nav = NavState::new();
        assert_eq!(nav.screen, Screen::Home);
        assert_eq!(nav.selected_component, "");
    }

    #[test]
    fn open_list_from_home() {
        let mut nav = NavState::new();
        nav.apply(NavAction::OpenList);
        assert_eq!(nav.screen, Screen::List);
    }

    #[test]
    fn back_from_list_returns_home() {
        let mut nav = NavState::new();
        nav.apply(NavAction::OpenList);
        nav.apply(NavAction::Back);
        assert_eq!(nav.screen, Screen::Home);
    }

    #[test]
    fn every_entry_opens_its_detail() {
        for entry in &ENTRIES {
            let mut nav = NavState::new();
            nav.apply(NavAction::OpenList);
            nav.apply(NavAction::OpenDetail(entry.title));
            assert_eq!(nav.screen, Screen::Detail);
            assert_eq!(nav.selected_component, entry.title);
        }
    }

    #[test]
    fn back_from_detail_keeps_selection() {
        let mut nav = NavState::new();
        nav.apply(NavAction::OpenList);
        nav.apply(NavAction::OpenDetail("Image"));
        nav.apply(NavAction::Back);
        assert_eq!(nav.screen, Screen::List);
        assert_eq!(nav.selected_component, "Image");
    }

    #[test]
    fn back_on_home_is_a_noop() {
        let mut nav = NavState::new();
        nav.apply(NavAction::Back);
        assert_eq!(nav.screen, Screen::Home);
        assert_eq!(nav.selected_component, "");
    }

    #[test]
    fn open_detail_outside_list_is_a_noop() {
        let mut nav = NavState::new();
        nav.apply(NavAction::OpenDetail("Text"));
        assert_eq!(nav.screen, Screen::Home);
        assert_eq!(nav.selected_component, "");
    }

    #[test]
    fn open_list_outside_home_is_a_noop() {
        let mut nav = NavState::new();
        nav.apply(NavAction::OpenList);
        nav.apply(NavAction::OpenDetail("Row"));
        nav.apply(NavAction::OpenList);
        assert_eq!(nav.screen, Screen::Detail);
    }

    #[test]
    fn full_walkthrough() {
        let mut nav = NavState::new();

        nav.apply(NavAction::OpenList);
        assert_eq!((nav.screen, nav.selected_component.as_str()), (Screen::List, ""));

        nav.apply(NavAction::OpenDetail("TextField"));
        assert_eq!(
            (nav.screen, nav.selected_component.as_str()),
            (Screen::Detail, "TextField")
        );

        nav.apply(NavAction::Back);
        assert_eq!(
            (nav.screen, nav.selected_component.as_str()),
            (Screen::List, "TextField")
        );

        nav.apply(NavAction::Back);
        assert_eq!(
            (nav.screen, nav.selected_component.as_str()),
            (Screen::Home, "TextField")
        );
    }
}
