//! Console prompting behind a small trait.
//!
//! The collector and the toolchain steps only ever ask two kinds of
//! question: a free-text line and a yes/no confirmation. Keeping that behind
//! [`Prompter`] lets the non-interactive mode and the tests answer without a
//! terminal.

use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::error::Result;

pub trait Prompter {
    /// Ask for a line of text. `hint` describes what a blank answer means.
    fn input(&self, prompt: &str, hint: &str) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Interactive prompts on the attached terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, hint: &str) -> Result<String> {
        let text = format!("{prompt} {}", format!("[{hint}]").dimmed());
        let value = Input::<String>::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let value = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(value)
    }
}

/// Answers every question with its default, for `--yes` runs
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn input(&self, prompt: &str, hint: &str) -> Result<String> {
        println!("{} {} {}", "?".blue(), prompt, format!("[{hint}]").dimmed());
        Ok(String::new())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let answer = if default { "yes" } else { "no" };
        println!("{} {} {}", "?".blue(), prompt, answer.dimmed());
        Ok(default)
    }
}
