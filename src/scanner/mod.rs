mod walker;

pub use walker::{find_files, Scanner};
