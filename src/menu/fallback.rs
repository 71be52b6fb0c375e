use super::{Menu, MenuAction, MenuOption, MenuState, MenuStep, Selection, ToggleOutcome};
use crate::console::Console;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Numbered-toggle menu for when the full-screen UI is unavailable
pub struct FallbackMenu<'a, R, W> {
    console: &'a mut Console<R, W>,
}

impl<'a, R: BufRead, W: Write> FallbackMenu<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>) -> Self {
        Self { console }
    }

    fn print_options(&mut self, options: &[MenuOption], state: &MenuState) -> Result<()> {
        let out = self.console.out();
        writeln!(out, "\nOptions:")?;
        for (i, option) in options.iter().enumerate() {
            let checkbox = if state.is_selected(i) { "[*]" } else { "[ ]" };
            let status = if option.enabled {
                String::new()
            } else {
                " (DISABLED)".dimmed().to_string()
            };
            writeln!(out, "  {}. {} {}{}", i + 1, checkbox, option.name, status)?;
        }

        let labels = match options.len() {
            0 => String::from("-"),
            1 => String::from("1"),
            n => format!("1-{}", n),
        };
        writeln!(
            out,
            "\nCommands: {} to toggle • 'go' to continue • 'q' to quit",
            labels
        )?;
        Ok(())
    }
}

impl<'a, R: BufRead, W: Write> Menu for FallbackMenu<'a, R, W> {
    fn open(&mut self, options: &[MenuOption]) -> Result<Option<Selection>> {
        {
            let out = self.console.out();
            writeln!(out, "\n{}", "=".repeat(60))?;
            writeln!(out, "{}", "   HTML/CSS CLEANING TOOL (Fallback Mode)".bold())?;
            writeln!(out, "{}", "=".repeat(60))?;
            writeln!(out, "Full-screen menu not available. Using numbered toggles.")?;
        }

        let mut state = MenuState::new();
        loop {
            self.print_options(options, &state)?;

            let Some(command) = self.console.prompt("Command: ")? else {
                return Ok(None);
            };
            let command = command.to_lowercase();

            let action = match command.as_str() {
                "q" | "quit" | "exit" => MenuAction::Cancel,
                "go" | "start" | "continue" => MenuAction::Confirm,
                other => {
                    let outcome = match other.parse::<usize>() {
                        Ok(label) if label >= 1 => state.toggle_index(label - 1, options),
                        _ => ToggleOutcome::OutOfRange,
                    };
                    match outcome {
                        ToggleOutcome::Toggled => {}
                        ToggleOutcome::Disabled => {
                            writeln!(self.console.out(), "{}", "This option is disabled.".yellow())?;
                        }
                        ToggleOutcome::OutOfRange => {
                            writeln!(self.console.out(), "{}", "Invalid command.".yellow())?;
                        }
                    }
                    continue;
                }
            };

            match state.handle(action, options) {
                MenuStep::Browsing => {}
                MenuStep::Confirmed(selection) => return Ok(Some(selection)),
                MenuStep::Cancelled => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options() -> Vec<MenuOption> {
        vec![
            MenuOption {
                name: "Alpha".into(),
                description: String::new(),
                enabled: true,
            },
            MenuOption {
                name: "Beta".into(),
                description: String::new(),
                enabled: false,
            },
            MenuOption {
                name: "Gamma".into(),
                description: String::new(),
                enabled: true,
            },
        ]
    }

    fn run(input: &str) -> (Option<Selection>, String) {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = FallbackMenu::new(&mut console).open(&options()).unwrap();
        let output = String::from_utf8_lossy(console.out()).into_owned();
        (result, output)
    }

    #[test]
    fn test_toggle_and_go() {
        let (result, output) = run("3\n1\ngo\n");
        assert_eq!(result, Some(Selection::from([0, 2])));
        assert!(output.contains("1. [*] Alpha"));
        assert!(output.contains("3. [*] Gamma"));
        assert!(output.contains("2. [ ] Beta (DISABLED)"));
    }

    #[test]
    fn test_go_with_nothing_is_empty_selection() {
        let (result, _) = run("START\n");
        assert_eq!(result, Some(Selection::new()));
    }

    #[test]
    fn test_quit_cancels_after_toggles() {
        for quit in ["q", "quit", "exit"] {
            let (result, _) = run(&format!("1\n{}\n", quit));
            assert_eq!(result, None);
        }
    }

    #[test]
    fn test_disabled_and_invalid_commands_reloop() {
        let (result, output) = run("2\n9\nbanana\n0\n1\n1\ncontinue\n");
        assert_eq!(result, Some(Selection::new()));
        assert!(output.contains("This option is disabled."));
        assert_eq!(output.matches("Invalid command.").count(), 3);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (result, _) = run("1\n");
        assert_eq!(result, None);
    }
}
