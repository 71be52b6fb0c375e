//! Checkbox menu over the fixed operation list.
//!
//! [`MenuState`] holds the highlight and the toggled set; both front-ends
//! feed it actions and stop once it leaves the browsing state.

mod fallback;
mod rich;

pub use fallback::FallbackMenu;
pub use rich::{action_for_key, RichMenu};

use anyhow::Result;
use std::collections::BTreeSet;
use std::io::{self, IsTerminal};

/// Indices of toggled options, iterated in list order
pub type Selection = BTreeSet<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

/// A single user intent, independent of how it was typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Toggle,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuStep {
    Browsing,
    Confirmed(Selection),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled,
    Disabled,
    OutOfRange,
}

#[derive(Debug, Clone)]
pub struct MenuState {
    current: usize,
    selected: Selection,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            current: 0,
            selected: Selection::new(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Names of the chosen options, in list order
    pub fn chosen_names<'a>(&self, options: &'a [MenuOption]) -> Vec<&'a str> {
        self.selected
            .iter()
            .filter_map(|&i| options.get(i))
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Flip membership of `index`, unless the option is disabled
    pub fn toggle_index(&mut self, index: usize, options: &[MenuOption]) -> ToggleOutcome {
        match options.get(index) {
            None => ToggleOutcome::OutOfRange,
            Some(option) if !option.enabled => ToggleOutcome::Disabled,
            Some(_) => {
                if !self.selected.remove(&index) {
                    self.selected.insert(index);
                }
                ToggleOutcome::Toggled
            }
        }
    }

    pub fn handle(&mut self, action: MenuAction, options: &[MenuOption]) -> MenuStep {
        let count = options.len();
        match action {
            MenuAction::Up if count > 0 => {
                self.current = (self.current + count - 1) % count;
            }
            MenuAction::Down if count > 0 => {
                self.current = (self.current + 1) % count;
            }
            MenuAction::Up | MenuAction::Down => {}
            MenuAction::Toggle => {
                self.toggle_index(self.current, options);
            }
            MenuAction::Confirm => return MenuStep::Confirmed(self.selected.clone()),
            MenuAction::Cancel => return MenuStep::Cancelled,
        }
        MenuStep::Browsing
    }
}

/// Common contract of the two front-ends.
///
/// `Ok(None)` is a user cancellation; an empty selection is a valid answer.
pub trait Menu {
    fn open(&mut self, options: &[MenuOption]) -> Result<Option<Selection>>;
}

/// Whether the full-screen front-end can be attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCapability {
    Available,
    Unavailable,
}

impl TerminalCapability {
    /// Decided once at start-up: both stdin and stdout must be terminals.
    pub fn detect() -> Self {
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<MenuOption> {
        ["one", "two", "three"]
            .iter()
            .enumerate()
            .map(|(i, name)| MenuOption {
                name: name.to_string(),
                description: String::new(),
                enabled: i != 1,
            })
            .collect()
    }

    #[test]
    fn test_navigation_wraps() {
        let opts = options();
        let mut state = MenuState::new();
        assert_eq!(state.current(), 0);

        state.handle(MenuAction::Up, &opts);
        assert_eq!(state.current(), 2);
        state.handle(MenuAction::Down, &opts);
        assert_eq!(state.current(), 0);
        state.handle(MenuAction::Down, &opts);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn test_toggle_disabled_is_ignored() {
        let opts = options();
        let mut state = MenuState::new();
        state.handle(MenuAction::Down, &opts);
        state.handle(MenuAction::Toggle, &opts);
        assert!(state.selected().is_empty());
        assert_eq!(state.toggle_index(1, &opts), ToggleOutcome::Disabled);
        assert_eq!(state.toggle_index(7, &opts), ToggleOutcome::OutOfRange);
    }

    #[test]
    fn test_double_toggle_restores() {
        let opts = options();
        let mut state = MenuState::new();
        state.handle(MenuAction::Toggle, &opts);
        assert!(state.is_selected(0));
        state.handle(MenuAction::Toggle, &opts);
        assert!(!state.is_selected(0));
    }

    #[test]
    fn test_confirm_empty_is_not_cancel() {
        let opts = options();
        let mut state = MenuState::new();
        assert_eq!(
            state.handle(MenuAction::Confirm, &opts),
            MenuStep::Confirmed(Selection::new())
        );
    }

    #[test]
    fn test_cancel_ignores_prior_toggles() {
        let opts = options();
        let mut state = MenuState::new();
        state.handle(MenuAction::Toggle, &opts);
        assert_eq!(state.handle(MenuAction::Cancel, &opts), MenuStep::Cancelled);
    }

    #[test]
    fn test_chosen_names_follow_list_order() {
        let opts = options();
        let mut state = MenuState::new();
        state.toggle_index(2, &opts);
        state.toggle_index(0, &opts);
        assert_eq!(state.chosen_names(&opts), vec!["one", "three"]);
    }

    #[test]
    fn test_empty_list_navigation_is_noop() {
        let mut state = MenuState::new();
        assert_eq!(state.handle(MenuAction::Down, &[]), MenuStep::Browsing);
        assert_eq!(state.current(), 0);
    }
}
