use crate::config::Config;
use crate::console::Console;
use crate::menu::MenuOption;
use crate::processor::Processor;
use crate::scanner::find_files;
use crate::transform::Transform;
use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::Path;

/// The fixed operation list, in menu and execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    HtmlClasses,
    Stylesheets,
    TemplateAttributes,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        Self::HtmlClasses,
        Self::Stylesheets,
        Self::TemplateAttributes,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HtmlClasses => "Remove classes from .html files",
            Self::Stylesheets => "Clear content from .css and .scss files",
            Self::TemplateAttributes => "Clean class/style attributes from JS/TS templates",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::HtmlClasses => {
                "Removes all class=\"...\" (and class='...') attributes from HTML elements."
            }
            Self::Stylesheets => "Empties all CSS/SCSS files (file contents set to empty).",
            Self::TemplateAttributes => {
                "Strips className, class and style attributes from JS/TS/JSX/TSX files."
            }
        }
    }

    /// Heading printed before the operation runs
    pub fn title(self) -> &'static str {
        match self {
            Self::HtmlClasses => "HTML Class Removal",
            Self::Stylesheets => "CSS/SCSS Clearing",
            Self::TemplateAttributes => "JS/TS Template Cleaning",
        }
    }

    /// Short label for the file family
    fn label(self) -> &'static str {
        match self {
            Self::HtmlClasses => "HTML",
            Self::Stylesheets => "CSS/SCSS",
            Self::TemplateAttributes => "JS/TS",
        }
    }

    pub fn transform(self) -> Transform {
        match self {
            Self::HtmlClasses => Transform::StripHtmlClasses,
            Self::Stylesheets => Transform::Clear,
            Self::TemplateAttributes => Transform::StripTemplateAttributes,
        }
    }

    fn confirm_prompt(self, count: usize) -> String {
        match self {
            Self::HtmlClasses => format!("Remove class attributes from {} file(s)?", count),
            Self::Stylesheets => format!("\n⚠️  Clear {} file(s)?", count),
            Self::TemplateAttributes => {
                format!("Remove class/style attributes from {} file(s)?", count)
            }
        }
    }

    /// Whether every matched path is listed before asking for confirmation
    fn lists_files(self) -> bool {
        matches!(self, Self::Stylesheets)
    }
}

/// Menu entries for every operation, with `enabled` taken from config
pub fn menu_options(config: &Config) -> Vec<MenuOption> {
    OperationKind::ALL
        .iter()
        .map(|&kind| MenuOption {
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            enabled: config.is_enabled(kind),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    NoFiles,
    Declined,
    Processed { succeeded: usize, total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    pub kind: OperationKind,
    pub outcome: OperationOutcome,
}

/// Scan, confirm, then rewrite every matching file under `root`.
pub fn run_operation<R: BufRead, W: Write>(
    kind: OperationKind,
    root: &Path,
    config: &Config,
    processor: &Processor,
    console: &mut Console<R, W>,
) -> Result<OperationOutcome> {
    let label = kind.label();
    writeln!(
        console.out(),
        "\n🔍 Searching for {} files in: {}",
        label,
        root.display()
    )?;

    let files = match find_files(root, config.extensions_for(kind)) {
        Ok(files) => files,
        Err(err) => {
            writeln!(console.out(), "{}", format!("✗ Scan failed: {:#}", err).red())?;
            Vec::new()
        }
    };
    if files.is_empty() {
        writeln!(console.out(), "{}", format!("❌ No {} files found.", label).yellow())?;
        return Ok(OperationOutcome::NoFiles);
    }

    writeln!(
        console.out(),
        "📁 Found {} {} file(s).",
        files.len().to_string().green().bold(),
        label
    )?;

    if kind.lists_files() {
        let verb = if processor.is_dry_run() {
            "would be"
        } else {
            "will be"
        };
        writeln!(console.out(), "\nFiles that {} cleared:", verb)?;
        for file in &files {
            writeln!(console.out(), "  • {}", file.display())?;
        }
    }

    if !console.confirm(&kind.confirm_prompt(files.len()))? {
        writeln!(console.out(), "{}", "Operation cancelled.".yellow())?;
        return Ok(OperationOutcome::Declined);
    }

    writeln!(console.out(), "\n{}", format!("🧹 Processing {} files...", label).cyan().bold())?;

    let mut write_err = None;
    let result = processor.process_all(&files, kind.transform(), |file_result| {
        let line = if file_result.success {
            file_result.message.green()
        } else {
            file_result.message.red()
        };
        if let Err(err) = writeln!(console.out(), "{}", line) {
            write_err.get_or_insert(err);
        }
    });
    if let Some(err) = write_err {
        return Err(err.into());
    }

    let tally = format!(
        "✅ Done. Successfully processed {}/{} file(s).",
        result.succeeded, result.total
    );
    if result.failed() == 0 {
        writeln!(console.out(), "\n{}", tally.green().bold())?;
    } else {
        writeln!(console.out(), "\n{}", tally.yellow().bold())?;
    }

    Ok(OperationOutcome::Processed {
        succeeded: result.succeeded,
        total: result.total,
    })
}
