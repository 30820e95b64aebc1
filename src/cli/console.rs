use crate::errors::AppError;
use std::io::{BufRead, Write};

/// Line-oriented terminal. Generic so the front ends run the same way over
/// stdin/stdout and over in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one line as typed, minus
    /// its line terminator.
    /// `None` means the input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.get_input()
    }

    pub fn get_input(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let line = input.strip_suffix('\n').unwrap_or(&input);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }

    pub fn confirm_action(&mut self, action: &str) -> Result<bool, AppError> {
        let answer = self.prompt(&format!("{action}? (y/n) "))?;
        Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
