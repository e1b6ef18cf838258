// src/integrations/terminal.rs
//
// Confirmation prompt on the controlling terminal

use std::io::{self, BufRead, Write};

use crate::services::Confirmation;

/// Asks on stdout and reads one answer line from stdin.
/// Only an explicit yes confirms; EOF and read errors decline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let stdout = io::stdout();
        ask(&mut stdin.lock(), &mut stdout.lock(), prompt)
    }
}

/// Write the prompt, read one line, interpret it
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> bool {
    if let Err(e) = write!(output, "{} [y/N] ", prompt).and_then(|_| output.flush()) {
        log::warn!("Could not show confirmation prompt: {}", e);
        return false;
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => false,
        Ok(_) => is_yes(&answer),
        Err(e) => {
            log::warn!("Could not read confirmation answer: {}", e);
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(typed: &str) -> (bool, String) {
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut output = Vec::new();
        let confirmed = ask(&mut input, &mut output, "Delete?");
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_confirms() {
        assert!(answer("y\n").0);
        assert!(answer("  YES \n").0);
        assert!(answer("sim\n").0);
    }

    #[test]
    fn test_anything_else_declines() {
        assert!(!answer("\n").0);
        assert!(!answer("no\n").0);
        assert!(!answer("maybe\n").0);
    }

    #[test]
    fn test_eof_declines() {
        assert!(!answer("").0);
    }

    #[test]
    fn test_prompt_is_written() {
        let (_, shown) = answer("n\n");
        assert_eq!(shown, "Delete? [y/N] ");
    }
}
