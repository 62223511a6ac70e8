use crate::*;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;

/// Plain console over any line reader and writer.
///
/// Used when stdin is not a terminal. Exhausted input reads as "no" to the
/// opening question and as quit at the menu.
pub struct Lines<R, W> {
    input: R,
    output: W,
}

impl<R, W> Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn into_output(self) -> W {
        self.output
    }
    /// Prompts once. `None` at end of input.
    fn read(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}: ", prompt).context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let ref mut buffer = String::new();
        match self.input.read_line(buffer).context("read input")? {
            0 => Ok(None),
            _ => Ok(Some(buffer.trim().to_string())),
        }
    }
}

impl<R, W> Console for Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    fn consent(&mut self) -> anyhow::Result<Consent> {
        loop {
            match self.read(CONSENT)? {
                None => return Ok(Consent::No),
                Some(answer) => match Consent::try_from(answer.as_str()) {
                    Ok(consent) => return Ok(consent),
                    Err(_) => self.say(CONSENT_RETRY)?,
                },
            }
        }
    }
    fn name(&mut self) -> anyhow::Result<String> {
        Ok(self.read(NAME)?.unwrap_or_default())
    }
    fn command(&mut self, prompt: &str) -> anyhow::Result<Command> {
        loop {
            match self.read(prompt)? {
                None => return Ok(Command::Quit),
                Some(answer) => match Command::try_from(answer.as_str()) {
                    Ok(command) => return Ok(command),
                    Err(_) => self.say(COMMAND_RETRY)?,
                },
            }
        }
    }
    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text).context("write output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Lines<&[u8], Vec<u8>> {
        Lines::new(input.as_bytes(), Vec::new())
    }
    fn transcript(console: Lines<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn retries_until_valid_consent() {
        let mut console = console("maybe\ny\n");
        assert_eq!(console.consent().unwrap(), Consent::Yes);
        assert_eq!(
            transcript(console),
            "Shall we play a game? (Y/N): Response must be Y or N\n\
             Shall we play a game? (Y/N): "
        );
    }

    #[test]
    fn retries_until_valid_command() {
        let mut console = console("x\n i \n");
        assert_eq!(console.command("Go").unwrap(), Command::Info);
        assert_eq!(
            transcript(console),
            "Go: Invalid response. Please enter R, P, S, Q, or I.\nGo: "
        );
    }

    #[test]
    fn end_of_input() {
        let mut console = console("");
        assert_eq!(console.consent().unwrap(), Consent::No);
        assert_eq!(console.command("Go").unwrap(), Command::Quit);
        assert_eq!(console.name().unwrap(), "");
    }

    #[test]
    fn name_is_trimmed() {
        let mut console = console("  Ada Lovelace \n");
        assert_eq!(console.name().unwrap(), "Ada Lovelace");
    }
}
