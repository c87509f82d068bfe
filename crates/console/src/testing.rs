//! Scripted [`Prompter`] for driving screens in tests.

use std::collections::VecDeque;

use anyhow::{Result, bail};

use crate::alert::Alert;
use crate::prompt::Prompter;
use crate::screens::MenuItem;

#[derive(Debug, Clone)]
pub enum Answer {
    Select(Option<usize>),
    Input(String),
    Confirm(bool),
}

impl Answer {
    pub fn pick<M: MenuItem>(item: M) -> Self {
        Answer::Select(Some(item.position()))
    }

    pub fn row(index: usize) -> Self {
        Answer::Select(Some(index))
    }

    pub fn text(value: &str) -> Self {
        Answer::Input(value.to_string())
    }
}

/// Replays queued answers in order and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub alerts: Vec<Alert>,
    pub questions: Vec<Alert>,
    pub shown: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn alert_messages(&self) -> Vec<&str> {
        self.alerts.iter().map(|a| a.message.as_str()).collect()
    }

    pub fn question_messages(&self) -> Vec<&str> {
        self.questions.iter().map(|a| a.message.as_str()).collect()
    }

    fn next(&mut self, asked: &str) -> Result<Answer> {
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("script exhausted at {asked:?}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        match self.next(prompt)? {
            Answer::Select(Some(i)) if i >= items.len() => {
                bail!("{prompt:?}: row {i} out of {} items", items.len())
            }
            Answer::Select(choice) => Ok(choice),
            other => bail!("{prompt:?}: expected a selection, script has {other:?}"),
        }
    }

    fn input(&mut self, prompt: &str, _initial: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Input(value) => Ok(value),
            other => bail!("{prompt:?}: expected text, script has {other:?}"),
        }
    }

    fn confirm(&mut self, question: &Alert) -> Result<bool> {
        self.questions.push(question.clone());
        match self.next(&question.message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => bail!("{:?}: expected yes/no, script has {other:?}", question.message),
        }
    }

    fn alert(&mut self, alert: &Alert) -> Result<()> {
        self.alerts.push(alert.clone());
        Ok(())
    }

    fn show(&mut self, text: &str) -> Result<()> {
        self.shown.push(text.to_string());
        Ok(())
    }
}
