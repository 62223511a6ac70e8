use crate::*;
use anyhow::Context;
use colored::Colorize;
use dialoguer::Input;

/// Interactive console: validated prompts with inline retry, colored verdicts.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    fn ask<T>(prompt: &str, retry: &'static str) -> anyhow::Result<T>
    where
        T: for<'a> TryFrom<&'a str, Error = String> + 'static,
    {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|i: &String| -> Result<(), String> {
                T::try_from(i.as_str())
                    .map(|_| ())
                    .map_err(|_| String::from(retry))
            })
            .report(false)
            .interact_text()
            .context("read from terminal")?;
        T::try_from(answer.as_str()).map_err(anyhow::Error::msg)
    }
}

impl Console for Terminal {
    fn consent(&mut self) -> anyhow::Result<Consent> {
        Self::ask(CONSENT, CONSENT_RETRY)
    }
    fn name(&mut self) -> anyhow::Result<String> {
        let name = Input::<String>::new()
            .with_prompt(NAME)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .context("read from terminal")?;
        Ok(name.trim().to_string())
    }
    fn command(&mut self, prompt: &str) -> anyhow::Result<Command> {
        Self::ask(prompt, COMMAND_RETRY)
    }
    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        Ok(println!("{}", text))
    }
    fn narrate(&mut self, narration: &Narration) -> anyhow::Result<()> {
        println!("{}", narration.matchup());
        if let Some(streak) = narration.streak() {
            println!("{}", streak.text().bold());
        }
        let verdict = narration.verdict();
        match narration.outcome() {
            Outcome::Win => println!("{}", verdict.green()),
            Outcome::Lose => println!("{}", verdict.red()),
            Outcome::Tie => println!("{}", verdict.yellow()),
        }
        if let Some(rule) = narration.rule() {
            println!("{}", rule.dimmed());
        }
        if let Some(milestone) = narration.milestone() {
            println!("{}", milestone.text().bold());
        }
        Ok(())
    }
}
