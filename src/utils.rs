use std::path::{Path, PathBuf};

/// Strip one layer of matching surrounding quotes, as pasted paths often carry.
///
/// Double quotes are removed first, then single quotes.
pub fn strip_matching_quotes(input: &str) -> &str {
    let mut s = input;
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            s = &s[1..s.len() - 1];
        }
    }
    s
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/").or_else(|| input.strip_prefix("~\\")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Expand `~` and make the path absolute, resolving symlinks when it exists.
pub fn resolve_path(input: &str) -> PathBuf {
    let expanded = expand_home(input);
    if let Ok(canonical) = expanded.canonicalize() {
        return canonical;
    }
    absolute(&expanded)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
