//! One interactive session: menu, path, then each selected operation in order.

use crate::config::Config;
use crate::console::{is_affirmative, Console};
use crate::menu::{FallbackMenu, Menu, RichMenu, Selection, TerminalCapability};
use crate::operations::{menu_options, run_operation, OperationKind, OperationReport};
use crate::processor::Processor;
use crate::utils::{resolve_path, strip_matching_quotes};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The menu was cancelled
    Cancelled,
    /// The menu was confirmed with nothing selected
    NothingSelected,
    /// The path prompt was abandoned
    PathCancelled,
    Completed(Vec<OperationReport>),
}

pub struct App<R, W> {
    console: Console<R, W>,
    config: Config,
    processor: Processor,
    capability: TerminalCapability,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, config: Config) -> Self {
        Self {
            console,
            config,
            processor: Processor::new(),
            capability: TerminalCapability::Unavailable,
        }
    }

    pub fn processor(mut self, processor: Processor) -> Self {
        self.processor = processor;
        self
    }

    /// Allow the full-screen menu when the terminal supports it
    pub fn capability(mut self, capability: TerminalCapability) -> Self {
        self.capability = capability;
        self
    }

    pub fn console(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        writeln!(self.console.out(), "{}", "🚀 HTML/CSS Cleaning Tool".cyan().bold())?;
        if self.processor.is_dry_run() {
            writeln!(
                self.console.out(),
                "{}",
                "[DRY RUN] No files will be modified.".yellow()
            )?;
        }

        let selected = match self.select_operations()? {
            None => {
                writeln!(self.console.out(), "\nGoodbye! 👋")?;
                return Ok(SessionEnd::Cancelled);
            }
            Some(selected) if selected.is_empty() => {
                writeln!(
                    self.console.out(),
                    "\n{}",
                    "❌ No operations selected. Goodbye!".yellow()
                )?;
                return Ok(SessionEnd::NothingSelected);
            }
            Some(selected) => selected,
        };

        let Some(project_path) = self.prompt_for_project_path()? else {
            writeln!(self.console.out(), "\nCancelled. Goodbye! 👋")?;
            return Ok(SessionEnd::PathCancelled);
        };

        writeln!(
            self.console.out(),
            "\n{} {}",
            "🚀 Processing:".cyan().bold(),
            project_path.display()
        )?;

        let mut reports = Vec::new();
        for kind in selected.iter().filter_map(|&i| OperationKind::from_index(i)) {
            writeln!(self.console.out(), "\n{}", "=".repeat(50))?;
            writeln!(self.console.out(), "OPERATION: {}", kind.title().bold())?;
            writeln!(self.console.out(), "{}", "=".repeat(50))?;

            tracing::debug!(operation = ?kind, root = %project_path.display(), "running operation");
            let outcome = run_operation(
                kind,
                &project_path,
                &self.config,
                &self.processor,
                &mut self.console,
            )?;
            reports.push(OperationReport { kind, outcome });
        }

        writeln!(
            self.console.out(),
            "\n{}",
            "🎉 All operations completed!".green().bold()
        )?;
        // End of input here is the same as pressing Enter.
        let _ = self.console.prompt("Press Enter to exit...")?;

        Ok(SessionEnd::Completed(reports))
    }

    /// Rich menu when available, numbered fallback otherwise.
    fn select_operations(&mut self) -> Result<Option<Selection>> {
        let options = menu_options(&self.config);

        if self.capability == TerminalCapability::Available && !self.config.plain_menu {
            match RichMenu::new().open(&options) {
                Ok(selection) => return Ok(selection),
                Err(err) => {
                    tracing::debug!("full-screen menu unavailable, falling back: {:#}", err);
                }
            }
        }

        FallbackMenu::new(&mut self.console).open(&options)
    }

    /// Keep asking until an existing directory is given or the user gives up.
    pub fn prompt_for_project_path(&mut self) -> Result<Option<PathBuf>> {
        writeln!(self.console.out(), "\n{}", "=".repeat(60))?;
        writeln!(self.console.out(), "Project Path")?;
        writeln!(self.console.out(), "{}", "=".repeat(60))?;

        loop {
            let Some(raw) = self.console.prompt("📂 Enter the project folder path: ")? else {
                return Ok(None);
            };
            let raw = strip_matching_quotes(&raw);

            if raw.is_empty() {
                writeln!(self.console.out(), "{}", "❌ Path cannot be empty.".red())?;
                continue;
            }

            let path = resolve_path(raw);
            let problem = if !path.exists() {
                format!("❌ Path does not exist: {}", path.display())
            } else if !path.is_dir() {
                format!("❌ Not a directory: {}", path.display())
            } else {
                return Ok(Some(path));
            };

            writeln!(self.console.out(), "{}", problem.red())?;
            let retry = self.console.prompt("Try again? (y/N): ")?;
            if !retry.as_deref().map_or(false, is_affirmative) {
                return Ok(None);
            }
        }
    }
}
