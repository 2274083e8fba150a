//! Interactive collection of the tool description.
//!
//! The question sequence lives in [`collect_tool_spec`] and talks to the
//! user only through [`ToolPrompt`], so it runs the same against a terminal
//! ([`DialoguerPrompt`]) and against a fixed script ([`ScriptedPrompt`]).

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use scaffold_core::{ExtraWindow, StepId, ToolName, ToolSpec, ToolSpecBuilder};
use std::cell::RefCell;
use std::collections::VecDeque;
use tracing::debug;

/// Question-and-answer channel to the user.
pub trait ToolPrompt {
    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be read.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Asks for a line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be read.
    fn input(&self, question: &str) -> Result<String>;

    /// Announces the step about to be collected.
    fn step_banner(&self, ordinal: usize);

    /// Tells the user an answer was rejected.
    fn reject(&self, message: &str);
}

/// Terminal prompt backed by `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    /// Creates a terminal prompt.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ToolPrompt for DialoguerPrompt {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .context("failed to read answer")
    }

    fn input(&self, question: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .context("failed to read answer")
    }

    fn step_banner(&self, ordinal: usize) {
        eprintln!(
            "{}",
            format!("-----  Step {ordinal}  -----").bold().reversed()
        );
    }

    fn reject(&self, message: &str) {
        eprintln!("{} {message}", "✗".red());
    }
}

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Confirm(bool),
    Text(String),
}

/// Prompt that replays a fixed list of answers.
///
/// Every question asked and every message shown is recorded.
///
/// # Examples
///
/// ```
/// use scaffold_cli::prompt::{ScriptedPrompt, ToolPrompt};
///
/// let prompt = ScriptedPrompt::new().with_confirm(true).with_text("criterias");
/// assert!(prompt.confirm("Add a step?", false).unwrap());
/// assert_eq!(prompt.input("Step id").unwrap(), "criterias");
/// assert!(prompt.input("Step name").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Answer>>,
    transcript: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    /// Creates a prompt with no answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a yes/no answer.
    #[must_use]
    pub fn with_confirm(self, answer: bool) -> Self {
        self.answers.borrow_mut().push_back(Answer::Confirm(answer));
        self
    }

    /// Appends a text answer.
    #[must_use]
    pub fn with_text(self, answer: &str) -> Self {
        self.answers
            .borrow_mut()
            .push_back(Answer::Text(answer.to_string()));
        self
    }

    /// Returns the questions and messages seen so far, in order.
    #[must_use]
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }

    /// Number of answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn pop_answer(&self, question: &str) -> Result<Answer> {
        self.transcript.borrow_mut().push(question.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for '{question}'"))
    }
}

impl ToolPrompt for ScriptedPrompt {
    fn confirm(&self, question: &str, _default: bool) -> Result<bool> {
        match self.pop_answer(question)? {
            Answer::Confirm(answer) => Ok(answer),
            Answer::Text(text) => Err(anyhow!("expected yes/no for '{question}', got '{text}'")),
        }
    }

    fn input(&self, question: &str) -> Result<String> {
        match self.pop_answer(question)? {
            Answer::Text(text) => Ok(text),
            Answer::Confirm(answer) => Err(anyhow!("expected text for '{question}', got {answer}")),
        }
    }

    fn step_banner(&self, ordinal: usize) {
        self.transcript.borrow_mut().push(format!("Step {ordinal}"));
    }

    fn reject(&self, message: &str) {
        self.transcript.borrow_mut().push(message.to_string());
    }
}

/// Collects the steps and the export choice for a tool.
///
/// Asks "add a step?" until the answer is no; for each step asks, in order,
/// the id, the name, whether it has an extra window (and its display name)
/// and whether it has sub-steps. Rejected ids are asked again. The export
/// question comes once, after the last step.
///
/// # Errors
///
/// Returns an error if the prompt fails.
pub fn collect_tool_spec(
    prompt: &dyn ToolPrompt,
    name: ToolName,
    display_name: impl Into<String>,
    maintenance: bool,
) -> Result<ToolSpec> {
    let mut builder = ToolSpec::builder(name, display_name).maintenance_mode(maintenance);

    loop {
        let question = if builder.step_count() == 0 {
            "Add a step?"
        } else {
            "Add another step?"
        };
        if !prompt.confirm(question, false)? {
            break;
        }

        let ordinal = builder.step_count() + 1;
        prompt.step_banner(ordinal);

        let id = ask_step_id(prompt, &builder)?;
        let step_name = prompt.input(&format!("Step name (without \"{ordinal}.\")"))?;

        let extra_window = if prompt.confirm("Add an extra window?", false)? {
            Some(ExtraWindow::new(
                prompt.input("Display name of the extra window")?,
            ))
        } else {
            None
        };
        let has_substeps = prompt.confirm("Does this step have sub-steps?", false)?;

        debug!("Collected step {ordinal}: {id}");
        builder.push_step(id, step_name, has_substeps, extra_window)?;
    }

    let excel_export = prompt.confirm("Add an Excel export?", false)?;
    Ok(builder.excel_export(excel_export).build())
}

fn ask_step_id(prompt: &dyn ToolPrompt, builder: &ToolSpecBuilder) -> Result<StepId> {
    loop {
        let raw = prompt.input("Step id (e.g. swot-criterias)")?;
        match StepId::new(&raw).and_then(|id| builder.check_unique(&id).map(|()| id)) {
            Ok(id) => return Ok(id),
            Err(err) => prompt.reject(&err.to_string()),
        }
    }
}
