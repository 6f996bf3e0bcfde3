//! Scripted provider for testing question flows without user interaction.
//!
//! `TestProvider` plays back a queue of [`InputResult`]s in visitation
//! order and records every interaction it was shown, so tests can assert
//! on visitation order, titles, step numbers and resolved options.
//!
//! # Example
//!
//! ```rust,ignore
//! use questree::{traverse, InputResult, Inputs, TestProvider};
//!
//! let provider = TestProvider::new()
//!     .answer("bot")
//!     .answer("my-project")
//!     .back()
//!     .answer("other-project");
//!
//! let mut inputs = Inputs::new();
//! traverse(&root, &mut inputs, &provider).await?;
//! assert_eq!(provider.transcript().len(), 4);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use questree_types::{AnswerValue, FlowError, Inputs, Validation};

use crate::provider::{
    ConfirmConfig, FileConfig, FilesConfig, FolderConfig, InputResult, MultiSelectConfig,
    SelectConfig, TextConfig, UiProvider,
};

/// One recorded provider call (or retry after a validation rejection).
#[derive(Debug, Clone)]
pub struct Interaction {
    pub name: String,
    pub title: String,
    pub kind: &'static str,
    pub step: usize,
    pub total_steps: usize,
    /// Resolved candidate ids; empty for non-selection interactions.
    pub option_ids: Vec<String>,
    pub default: Option<String>,
}

/// A provider that answers from a pre-recorded script.
#[derive(Debug, Default)]
pub struct TestProvider {
    script: Mutex<VecDeque<InputResult>>,
    transcript: Mutex<Vec<Interaction>>,
    rejections: Mutex<Vec<String>>,
}

impl TestProvider {
    /// Create a provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw result to the script.
    pub fn with_result(mut self, result: InputResult) -> Self {
        self.script
            .get_mut()
            .expect("script lock poisoned")
            .push_back(result);
        self
    }

    /// Append a successful answer.
    pub fn answer(self, value: impl Into<AnswerValue>) -> Self {
        self.with_result(InputResult::Success(value.into()))
    }

    /// Append a skip-with-value result.
    pub fn skip(self, value: impl Into<AnswerValue>) -> Self {
        self.with_result(InputResult::Skip(value.into()))
    }

    /// Append a back-navigation request.
    pub fn back(self) -> Self {
        self.with_result(InputResult::Back)
    }

    /// Append a cancellation.
    pub fn cancel(self) -> Self {
        self.with_result(InputResult::Cancel)
    }

    /// Everything this provider was asked, in order, one entry per attempt.
    pub fn transcript(&self) -> Vec<Interaction> {
        self.transcript
            .lock()
            .expect("transcript lock poisoned")
            .clone()
    }

    /// Validation messages that rejected a scripted answer.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections
            .lock()
            .expect("rejections lock poisoned")
            .clone()
    }

    fn next_scripted(&self, name: &str) -> Result<InputResult, FlowError> {
        self.script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .ok_or_else(|| {
                FlowError::Provider(anyhow::anyhow!(
                    "test script exhausted at question '{name}'"
                ))
            })
    }

    /// Pop script entries until one passes validation, mimicking a real
    /// provider's re-prompt loop.
    async fn interact(
        &self,
        interaction: Interaction,
        validation: Option<&Validation>,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        loop {
            self.transcript
                .lock()
                .expect("transcript lock poisoned")
                .push(interaction.clone());
            let result = self.next_scripted(&interaction.name)?;
            if let (InputResult::Success(value), Some(validation)) = (&result, validation)
                && let Some(message) = validation.check(value, inputs).await
            {
                self.rejections
                    .lock()
                    .expect("rejections lock poisoned")
                    .push(message);
                continue;
            }
            return Ok(result);
        }
    }
}

#[async_trait]
impl UiProvider for TestProvider {
    async fn select_one(
        &self,
        config: SelectConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        let interaction = Interaction {
            name: config.name,
            title: config.title,
            kind: "single-select",
            step: config.step,
            total_steps: config.total_steps,
            option_ids: config.options.ids().iter().map(|s| s.to_string()).collect(),
            default: config.default,
        };
        self.interact(interaction, config.validation.as_ref(), inputs)
            .await
    }

    async fn select_many(
        &self,
        config: MultiSelectConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        let interaction = Interaction {
            name: config.name,
            title: config.title,
            kind: "multi-select",
            step: config.step,
            total_steps: config.total_steps,
            option_ids: config.options.ids().iter().map(|s| s.to_string()).collect(),
            default: config.default.map(|ids| ids.join(",")),
        };
        self.interact(interaction, config.validation.as_ref(), inputs)
            .await
    }

    async fn input_text(
        &self,
        config: TextConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        let interaction = Interaction {
            name: config.name,
            title: config.title,
            kind: "text",
            step: config.step,
            total_steps: config.total_steps,
            option_ids: Vec::new(),
            default: config.default,
        };
        self.interact(interaction, config.validation.as_ref(), inputs)
            .await
    }

    async fn select_file(
        &self,
        config: FileConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        let interaction = Interaction {
            name: config.name,
            title: config.title,
            kind: "single-file",
            step: config.step,
            total_steps: config.total_steps,
            option_ids: Vec::new(),
            default: config.default,
        };
        self.interact(interaction, config.validation.as_ref(), inputs)
            .await
    }

    async fn select_files(
        &self,
        config: FilesConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        let interaction = Interaction {
            name: config.name,
            title: config.title,
            kind: "multi-file",
            step: config.step,
            total_steps: config.total_steps,
            option_ids: Vec::new(),
            default: config.default.map(|paths| paths.join(",")),
        };
        self.interact(interaction, config.validation.as_ref(), inputs)
            .await
    }

    async fn select_folder(
        &self,
        config: FolderConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        let interaction = Interaction {
            name: config.name,
            title: config.title,
            kind: "folder",
            step: config.step,
            total_steps: config.total_steps,
            option_ids: Vec::new(),
            default: config.default,
        };
        self.interact(interaction, config.validation.as_ref(), inputs)
            .await
    }

    async fn confirm(
        &self,
        config: ConfirmConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError> {
        let interaction = Interaction {
            name: config.name,
            title: config.title,
            kind: "confirm",
            step: config.step,
            total_steps: config.total_steps,
            option_ids: Vec::new(),
            default: config.default.map(|b| b.to_string()),
        };
        self.interact(interaction, None, inputs).await
    }
}
