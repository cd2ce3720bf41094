use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::eval;

/// Prompt printed before every line read by the shell.
pub const DEFAULT_PROMPT: &str = "Enter an expression: ";

/// One line of shell input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `exit`: leave the loop.
    Exit,
    /// `clear`: wipe the terminal.
    Clear,
    /// A blank line.
    Empty,
    /// Anything else, handed to [`eval`] as is.
    Expression(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a line of input.
    ///
    /// Commands are recognized after trimming surrounding whitespace. An
    /// expression keeps its text, minus the line terminator.
    ///
    /// # Example
    /// ```
    /// use rpncalc::shell::Command;
    ///
    /// assert_eq!(Command::parse("exit\n"), Command::Exit);
    /// assert_eq!(Command::parse("  clear "), Command::Clear);
    /// assert_eq!(Command::parse("\n"), Command::Empty);
    /// assert_eq!(Command::parse("1 + 2\r\n"), Command::Expression("1 + 2"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "exit" => Self::Exit,
            "clear" => Self::Clear,
            "" => Self::Empty,
            _ => Self::Expression(line.trim_end_matches(['\n', '\r'])),
        }
    }
}

/// A read/eval/print loop over arbitrary input and output streams.
#[derive(Debug, Clone)]
pub struct Shell {
    prompt: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl Shell {
    /// Creates a shell that prints `prompt` before reading each line.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into() }
    }

    /// Runs the loop until `exit` or the end of `input`.
    ///
    /// Each expression prints either `Result: <value>` or
    /// `Error: <message>`. A failed expression does not stop the loop.
    ///
    /// # Errors
    /// Returns an error only if reading `input` or writing `output` fails.
    ///
    /// # Example
    /// ```
    /// use rpncalc::shell::Shell;
    ///
    /// let mut output = Vec::new();
    /// Shell::new("> ").run("2+2\n1/0\nexit\n".as_bytes(), &mut output).unwrap();
    ///
    /// let output = String::from_utf8(output).unwrap();
    /// assert!(output.contains("Result: 4"));
    /// assert!(output.contains("Error: Division by zero is not allowed."));
    /// ```
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let command = Command::parse(&line);
            log::debug!("shell command: {command:?}");

            match command {
                Command::Exit => break,
                Command::Clear => execute!(output, Clear(ClearType::All), MoveTo(0, 0))?,
                Command::Empty => {},
                Command::Expression(expression) => match eval(expression) {
                    Ok(value) => writeln!(output, "Result: {value}")?,
                    Err(e) => writeln!(output, "Error: {e}")?,
                },
            }
        }

        Ok(())
    }
}

/// Evaluates every line of a script and writes one outcome per line.
///
/// Blank lines and lines starting with `#` are skipped. Results are written
/// as `<expression> = <value>`, failures as `Error on line <n>: <message>`.
///
/// # Returns
/// The number of lines that failed to evaluate.
///
/// # Errors
/// Returns an error only if writing `output` fails.
///
/// # Example
/// ```
/// use rpncalc::shell::run_script;
///
/// let mut output = Vec::new();
/// let failures = run_script("# sums\n1+1\n\n2*(3\n", &mut output).unwrap();
///
/// assert_eq!(failures, 1);
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "1+1 = 2\nError on line 4: Mismatched parentheses in expression.\n");
/// ```
pub fn run_script<W: Write>(script: &str, mut output: W) -> io::Result<usize> {
    let mut failures = 0;

    for (index, line) in script.lines().enumerate() {
        let expression = line.trim();
        if expression.is_empty() || expression.starts_with('#') {
            continue;
        }

        match eval(expression) {
            Ok(value) => writeln!(output, "{expression} = {value}")?,
            Err(e) => {
                failures += 1;
                writeln!(output, "Error on line {}: {e}", index + 1)?;
            },
        }
    }

    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        Shell::new("> ").run(input.as_bytes(), &mut output)
                        .expect("in-memory streams do not fail");
        String::from_utf8(output).expect("shell output is utf-8")
    }

    #[test]
    fn exit_stops_reading() {
        let output = session("1+1\nexit\n2+2\n");
        assert!(output.contains("Result: 2"));
        assert!(!output.contains("Result: 4"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        assert_eq!(session("3*3"), "> Result: 9\n> ");
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let output = session("3 @ 4\n(1+2\n6 & 3\n");
        assert!(output.contains("Error: Invalid operator: @"));
        assert!(output.contains("Error: Mismatched parentheses in expression."));
        assert!(output.contains("Result: 2"));
    }

    #[test]
    fn blank_lines_only_prompt_again() {
        assert_eq!(session("\n\nexit\n"), "> > > ");
    }

    #[test]
    fn clear_emits_terminal_escape() {
        let output = session("clear\nexit\n");
        assert!(output.contains("\u{1b}[2J"));
        assert!(!output.contains("Error"));
    }

    #[test]
    fn commands_are_not_expressions() {
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("exit 1"), Command::Expression("exit 1"));
        assert_eq!(Command::parse(" 2 + 2 \n"), Command::Expression(" 2 + 2 "));
    }

    #[test]
    fn script_skips_comments_and_counts_failures() {
        let mut output = Vec::new();
        let failures = run_script("#header\n2^3^2\n5/0\n   \n1.2.3\n", &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(failures, 2);
        assert_eq!(output,
                   "2^3^2 = 64\nError on line 3: Division by zero is not allowed.\nError on \
                    line 5: Invalid operand: 1.2.3\n");
    }
}
