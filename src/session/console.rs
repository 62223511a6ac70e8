use crate::*;

/// Where a session reads answers and writes its transcript.
///
/// Implementations own validation: the reading methods keep prompting until
/// the answer parses, so the session only ever sees valid values.
pub trait Console {
    /// Y/N to the opening question.
    fn consent(&mut self) -> anyhow::Result<Consent>;
    /// Player name, trimmed. May be empty.
    fn name(&mut self) -> anyhow::Result<String>;
    /// Next menu command.
    fn command(&mut self, prompt: &str) -> anyhow::Result<Command>;
    /// One block of output, newline-terminated.
    fn say(&mut self, text: &str) -> anyhow::Result<()>;
    fn narrate(&mut self, narration: &Narration) -> anyhow::Result<()> {
        self.say(&narration.to_string())
    }
}
