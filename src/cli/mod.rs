use crate::app::{App, SessionEnd};
use crate::config::Config;
use crate::console::Console;
use crate::menu::TerminalCapability;
use crate::processor::Processor;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markup-stripper")]
#[command(version, about = "Strip class and style markup from HTML, CSS/SCSS and JS/TS sources", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Always use the numbered text menu
    #[arg(long)]
    pub plain: bool,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<SessionEnd> {
        crate::logging::init(self.verbose);

        install_interrupt_handler();

        // Without --config the built-in defaults apply; nothing is read from disk.
        let mut config = match &self.config {
            Some(config_path) => Config::load(config_path)?,
            None => Config::default(),
        };
        config.plain_menu |= self.plain;

        let capability = TerminalCapability::detect();
        tracing::debug!(?capability, plain = config.plain_menu, "menu capability");

        let mut app = App::new(Console::stdio(), config)
            .processor(Processor::new().dry_run(self.dry_run))
            .capability(capability);
        app.run()
    }
}

/// Ctrl+C at a line prompt ends the session like a cancellation.
///
/// The full-screen menu reads Ctrl+C as a key in raw mode, so this only
/// fires while a line prompt is waiting.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!("\n\nCancelled. Goodbye! 👋");
        std::process::exit(0);
    });
    if let Err(err) = installed {
        tracing::debug!("interrupt handler not installed: {}", err);
    }
}
