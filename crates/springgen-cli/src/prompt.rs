//! Line-oriented console prompter.
//!
//! Questions, warnings and progress go to the writer (stderr in
//! production) so stdout stays free for the final summary or JSON report.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use tracing::trace;

use springgen_core::{application::ApplicationError, error::SpringgenResult, prelude::Prompter};

/// [`Prompter`] over any reader/writer pair.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    color: bool,
    quiet: bool,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W, color: bool, quiet: bool) -> Self {
        Self {
            input,
            output,
            color,
            quiet,
        }
    }

    /// Consume the prompter and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_prompt(&mut self, text: &str) -> SpringgenResult<()> {
        let marker = if self.color {
            "?".cyan().bold().to_string()
        } else {
            "?".to_string()
        };
        write!(self.output, "{marker} {text}: ")
            .and_then(|()| self.output.flush())
            .map_err(|e| prompt_failed(&e))
    }

    /// One line without its terminator, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, which no validator accepts,
    /// so a garbled answer is rejected like any other bad answer.
    fn read_line(&mut self) -> SpringgenResult<Option<String>> {
        let mut raw = Vec::new();
        let n = self
            .input
            .read_until(b'\n', &mut raw)
            .map_err(|e| prompt_failed(&e))?;
        if n == 0 {
            // Keep the transcript readable when input is piped.
            let _ = writeln!(self.output);
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        trace!(answer = %trimmed, "Read answer");
        Ok(Some(trimmed))
    }

    fn line(&mut self, text: String) {
        let _ = writeln!(self.output, "{text}");
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, label: &str, default: Option<&str>) -> SpringgenResult<String> {
        let text = match default {
            Some(d) => format!("{label} ({d})"),
            None => label.to_string(),
        };
        self.write_prompt(&text)?;

        let answer = self.read_line()?.unwrap_or_default();
        match default {
            Some(d) if answer.trim().is_empty() => Ok(d.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, label: &str) -> SpringgenResult<bool> {
        self.write_prompt(&format!("{label} (y/N)"))?;
        Ok(self
            .read_line()?
            .is_some_and(|a| is_yes(a.trim())))
    }

    fn warn(&mut self, message: &str) {
        let text = if self.color {
            format!("{} {}", "\u{26a0}".yellow().bold(), message.yellow())
        } else {
            format!("\u{26a0} {message}")
        };
        self.line(text);
    }

    fn status(&mut self, message: &str) {
        if self.quiet {
            return;
        }
        let text = if self.color {
            message.dimmed().to_string()
        } else {
            message.to_string()
        };
        self.line(text);
    }
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn prompt_failed(e: &std::io::Error) -> springgen_core::error::SpringgenError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false, false)
    }

    fn transcript(p: ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn ask_returns_answer_and_shows_default() {
        let mut p = prompter("org.acme\n");
        let answer = p.ask("Base package", Some("com.example")).unwrap();
        assert_eq!(answer, "org.acme");
        assert!(transcript(p).contains("? Base package (com.example): "));
    }

    #[test]
    fn empty_answer_takes_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Output path", Some("./out")).unwrap(), "./out");
    }

    #[test]
    fn empty_answer_without_default_is_empty() {
        let mut p = prompter("   \n");
        assert_eq!(p.ask("Entity name", None).unwrap(), "   ");
    }

    #[test]
    fn end_of_input_behaves_like_empty_answer() {
        let mut p = prompter("");
        assert_eq!(p.ask("Output path", Some("./out")).unwrap(), "./out");
        assert_eq!(p.ask("Entity name", None).unwrap(), "");
        assert!(!p.confirm("Add new field?").unwrap());
    }

    #[test]
    fn crlf_is_stripped() {
        let mut p = prompter("Post\r\n");
        assert_eq!(p.ask("Entity name", None).unwrap(), "Post");
    }

    #[test]
    fn confirm_accepts_only_yes() {
        let mut p = prompter("y\nYES\nyes\nn\nsure\n\n");
        assert!(p.confirm("a").unwrap());
        assert!(p.confirm("b").unwrap());
        assert!(p.confirm("c").unwrap());
        assert!(!p.confirm("d").unwrap());
        assert!(!p.confirm("e").unwrap());
        assert!(!p.confirm("f").unwrap());
    }

    #[test]
    fn quiet_hides_status_but_not_warnings() {
        let mut p = ConsolePrompter::new(Cursor::new(Vec::new()), Vec::new(), false, true);
        p.status("Generating components...");
        p.warn("Invalid field name. Skipping field.");
        let out = transcript(p);
        assert!(!out.contains("Generating"));
        assert!(out.contains("\u{26a0} Invalid field name. Skipping field."));
    }

    #[test]
    fn invalid_utf8_is_an_answer_not_a_failure() {
        let mut p = ConsolePrompter::new(
            Cursor::new(b"ti\xfftle\nbody\n".to_vec()),
            Vec::new(),
            false,
            false,
        );
        assert_eq!(p.ask("Field name", None).unwrap(), "ti\u{fffd}tle");
        assert_eq!(p.ask("Field name", None).unwrap(), "body");
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("stdin closed"))
        }
    }

    #[test]
    fn read_error_is_prompt_failure() {
        let mut p = ConsolePrompter::new(
            std::io::BufReader::new(FailingReader),
            Vec::new(),
            false,
            false,
        );
        let err = p.ask("Entity name", None).unwrap_err();
        assert!(err.to_string().contains("stdin closed"));
    }
}
