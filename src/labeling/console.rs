use crate::labeling::label::Choice;
use crate::utils::Result;
use std::io::{BufRead, Write};

pub const CHOICE_HELP: &str = "Type: 1 = dual-use, 0 = not dual-use, m = maybe, q = quit";
pub const CHOICE_PROMPT: &str = "Your choice: ";
pub const INVALID_CHOICE: &str = "Invalid input. Please type 1, 0, m, or q.";

pub trait Terminal {
    fn show(&mut self, line: &str) -> Result<()>;

    /// Prints `prompt` and reads one line. `None` means input is closed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn show(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

pub fn prompt_choice<T: Terminal + ?Sized>(terminal: &mut T) -> Result<Choice> {
    loop {
        let Some(line) = terminal.ask(CHOICE_PROMPT)? else {
            tracing::info!("Input closed, treating as quit");
            return Ok(Choice::Quit);
        };

        match Choice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => terminal.show(INVALID_CHOICE)?,
        }
    }
}

pub fn prompt_yes_no<T: Terminal + ?Sized>(terminal: &mut T, prompt: &str) -> Result<bool> {
    let answer = terminal.ask(prompt)?.unwrap_or_default();
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
