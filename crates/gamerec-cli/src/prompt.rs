//! Interactive operator prompts

use anyhow::Result;
use console::Term;

/// Source of operator answers.
pub trait Prompter {
    /// Show `question` and read one line of input, without the trailing newline.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompts on the attached terminal.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.term.write_str(question)?;
        let answer = self.term.read_line()?;
        tracing::debug!(question, answer = %answer, "Prompt answered");
        Ok(answer)
    }
}

/// Replays fixed answers in order.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted answer for {:?}", question))
    }
}
