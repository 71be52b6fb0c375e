pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod menu;
pub mod operations;
pub mod processor;
pub mod scanner;
pub mod transform;
pub mod utils;

// Re-export commonly used types
pub use app::{App, SessionEnd};
pub use config::Config;
pub use processor::Processor;
pub use scanner::{find_files, Scanner};
pub use transform::{clear_content, remove_html_classes, remove_js_template_attributes, Transform};
