//! Line-oriented prompts over any reader/writer pair.

use anyhow::Result;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a prompt and read one trimmed line.
    ///
    /// Returns `None` at end of input, which callers treat like an interrupt.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` (or end of input) declines.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{} (y/N): ", prompt))?;
        Ok(answer.map_or(false, |a| is_affirmative(&a)))
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_and_detects_eof() {
        let mut c = console("  hello  \n");
        assert_eq!(c.prompt("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(c.prompt("> ").unwrap(), None);
        assert!(String::from_utf8_lossy(c.out()).starts_with("> > "));
    }

    #[test]
    fn test_confirm_answers() {
        let mut c = console("y\nYES\nno\n\n");
        assert!(c.confirm("Go?").unwrap());
        assert!(c.confirm("Go?").unwrap());
        assert!(!c.confirm("Go?").unwrap());
        assert!(!c.confirm("Go?").unwrap());
        assert!(!c.confirm("Go?").unwrap());
    }
}
