use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use attendance_core::parse_answer;

/// Line-based questions on stdin/stdout, or any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks until the reply is yes or no. Running out of input is an error.
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "{} [y/n]: ", question)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "no answer given",
                ));
            };
            match parse_answer(&line) {
                Some(answer) => return Ok(answer),
                None => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Asks for a file path; an empty reply or end of input means no choice.
    pub fn ask_path(&mut self, label: &str) -> io::Result<Option<PathBuf>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .map(PathBuf::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_yes_no_repeats_until_valid() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("maybe\nY\n".as_bytes(), &mut out);
        assert!(prompter.ask_yes_no("Did you attend the class: Math?").unwrap());

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("[y/n]").count(), 2);
        assert!(text.contains("Please answer y or n."));
    }

    #[test]
    fn test_ask_yes_no_eof_is_error() {
        let mut prompter = Prompter::new("".as_bytes(), Vec::new());
        let err = prompter.ask_yes_no("Sure?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_ask_path_blank_is_none() {
        let mut prompter = Prompter::new("   \n".as_bytes(), Vec::new());
        assert_eq!(prompter.ask_path("Schedule file").unwrap(), None);

        let mut prompter = Prompter::new(" week.csv \n".as_bytes(), Vec::new());
        assert_eq!(
            prompter.ask_path("Schedule file").unwrap(),
            Some(PathBuf::from("week.csv"))
        );
    }
}
