//! Mock implementations for testing
//!
//! Scripted stand-ins for the interactive seams so collection and the
//! toolchain steps can be driven without a terminal.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::Result;
use crate::prompt::Prompter;

/// A prompter that replays canned answers in order.
///
/// Text prompts pop from the answer queue; an exhausted queue answers blank.
/// Confirmations pop from a separate queue and fall back to the prompt's
/// default. Every prompt text is recorded for later inspection.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            confirmations: RefCell::new(VecDeque::new()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn with_confirmations<I>(self, confirmations: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.confirmations.borrow_mut().extend(confirmations);
        self
    }

    /// Prompt texts in the order they were asked
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, _hint: &str) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or_default())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.confirmations.borrow_mut().pop_front().unwrap_or(default))
    }
}
