//! Line-oriented output for the interactive generator.

use crate::entropy::{EntropyError, EntropyStrategy};
use crate::passphrase::{Passphrase, Progress};
use crossterm::{
    cursor::{RestorePosition, SavePosition},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Raw mode does not translate `\n`, so every line ends with both.
const NEWLINE: &str = "\r\n";

/// Renders progress, passphrases and the regenerate prompt.
pub struct Renderer<W: Write> {
    out: W,
    /// Whether the cursor position for the countdown has been saved.
    counting: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            counting: false,
        }
    }

    /// Explains keystroke timing once, before the first passphrase.
    pub fn keystroke_notice(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            Print("Die rolls are calculated using the nanoseconds between your keypresses."),
            Print(NEWLINE),
            Print("This is a best-effort source; use --urandom for cryptographic randomness."),
            Print(NEWLINE)
        )?;
        self.out.flush()
    }

    /// Starts the "key presses left" countdown line.
    pub fn begin_countdown(&mut self) -> io::Result<()> {
        queue!(self.out, Print("Key presses left: "), SavePosition)?;
        self.counting = true;
        self.out.flush()
    }

    /// Overwrites the countdown with `remaining`.
    pub fn show_remaining(&mut self, remaining: usize) -> io::Result<()> {
        if self.counting {
            queue!(self.out, RestorePosition, Clear(ClearType::UntilNewLine))?;
        }
        queue!(self.out, Print(remaining))?;
        self.out.flush()
    }

    /// Ends the countdown line.
    pub fn end_countdown(&mut self) -> io::Result<()> {
        self.counting = false;
        queue!(self.out, Print(NEWLINE))?;
        self.out.flush()
    }

    /// Prints a generated passphrase.
    pub fn show_passphrase(
        &mut self,
        passphrase: &Passphrase,
        strategy: EntropyStrategy,
    ) -> io::Result<()> {
        queue!(self.out, Print(format!("Generated passphrase: {passphrase}")), Print(NEWLINE))?;
        match strategy {
            EntropyStrategy::SecureRandom => queue!(
                self.out,
                Print(format!("Entropy: {:.1} bits", passphrase.entropy_bits())),
                Print(NEWLINE)
            )?,
            EntropyStrategy::KeystrokeTiming => queue!(
                self.out,
                Print(format!(
                    "Entropy: at most {:.1} bits (keystroke timing is best-effort)",
                    passphrase.entropy_bits()
                )),
                Print(NEWLINE)
            )?,
        }
        self.out.flush()
    }

    /// Asks whether to generate another passphrase.
    ///
    /// `next_char` blocks for the next typed character. Only `y` or `n`
    /// (either case) is accepted; other keys are ignored.
    pub fn prompt_again<F>(&mut self, mut next_char: F) -> Result<bool, EntropyError>
    where
        F: FnMut() -> Result<char, EntropyError>,
    {
        queue!(self.out, Print("Do you want to generate another password? [y/n]"))?;
        self.out.flush()?;

        let answer = loop {
            if let Some(answer) = parse_answer(next_char()?) {
                break answer;
            }
        };

        queue!(self.out, Print(if answer { "y" } else { "n" }), Print(NEWLINE))?;
        self.out.flush()?;
        Ok(answer)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for Renderer<W> {
    fn rolls_remaining(&mut self, remaining: usize) {
        if let Err(e) = self.show_remaining(remaining) {
            tracing::warn!(error = %e, "Failed to render remaining key presses");
        }
    }
}

/// Interprets a key as a yes/no answer.
pub fn parse_answer(key: char) -> Option<bool> {
    match key.to_ascii_lowercase() {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedSource;
    use crate::passphrase::generate_with_progress;
    use crate::wordlist::{WordLookup, WORDLIST_SIZE};

    fn rendered(renderer: Renderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_parse_answer_case_insensitive() {
        assert_eq!(parse_answer('y'), Some(true));
        assert_eq!(parse_answer('Y'), Some(true));
        assert_eq!(parse_answer('n'), Some(false));
        assert_eq!(parse_answer('N'), Some(false));
        assert_eq!(parse_answer('q'), None);
    }

    #[test]
    fn test_passphrase_line() {
        let lookup = WordLookup::from_words((0..WORDLIST_SIZE).map(|n| format!("w{n}")));
        let mut source = ScriptedSource::from_values([1, 1, 1, 1, 1, 6, 6, 6, 6, 6]);
        let mut renderer = Renderer::new(Vec::new());

        let passphrase = crate::passphrase::generate(2, &lookup, &mut source).unwrap();
        renderer
            .show_passphrase(&passphrase, EntropyStrategy::SecureRandom)
            .unwrap();

        let output = rendered(renderer);
        assert!(output.starts_with("Generated passphrase: w0 w7775\r\n"));
        assert!(output.contains("Entropy: 25.8 bits"));
    }

    #[test]
    fn test_prompt_ignores_other_keys_and_echoes() {
        let mut typed = "xq7N".chars();
        let mut renderer = Renderer::new(Vec::new());

        let again = renderer
            .prompt_again(|| typed.next().ok_or(EntropyError::Interrupted))
            .unwrap();

        assert!(!again);
        assert_eq!(typed.next(), None);
        assert_eq!(
            rendered(renderer),
            "Do you want to generate another password? [y/n]n\r\n"
        );
    }

    #[test]
    fn test_prompt_accepts_uppercase_yes() {
        let mut typed = " Yn".chars();
        let mut renderer = Renderer::new(Vec::new());

        assert!(renderer
            .prompt_again(|| typed.next().ok_or(EntropyError::Interrupted))
            .unwrap());
        assert_eq!(typed.next(), Some('n'));
    }

    #[test]
    fn test_prompt_interrupted() {
        let mut renderer = Renderer::new(Vec::new());

        assert!(matches!(
            renderer.prompt_again(|| Err(EntropyError::Interrupted)),
            Err(EntropyError::Interrupted)
        ));
    }

    #[test]
    fn test_countdown_rendered_per_roll() {
        let lookup = WordLookup::from_words((0..WORDLIST_SIZE).map(|n| format!("w{n}")));
        let mut source = ScriptedSource::from_values([2; 5]);
        let mut renderer = Renderer::new(Vec::new());

        renderer.begin_countdown().unwrap();
        generate_with_progress(1, &lookup, &mut source, &mut renderer).unwrap();
        renderer.end_countdown().unwrap();

        let output = rendered(renderer);
        assert!(output.starts_with("Key presses left: "));
        for count in 1..=5 {
            assert!(output.contains(&count.to_string()));
        }
        assert!(output.ends_with("1\r\n"));
    }
}
