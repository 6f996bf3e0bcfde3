use std::collections::HashMap;

use async_trait::async_trait;
use questree_types::{
    AnswerValue, FlowError, Inputs, SelectOptions, SelectionChangeHook, Validation,
};

/// Outcome of one UI interaction.
#[derive(Debug, Clone)]
pub enum InputResult {
    /// The user supplied a value.
    Success(AnswerValue),

    /// A value was assigned without manual input (auto-skip, preset).
    Skip(AnswerValue),

    /// The user asked to return to the previous question.
    Back,

    /// The user backed out of the whole flow.
    Cancel,
}

/// Configuration for a text input interaction.
///
/// All dynamic fields are resolved by the engine before the provider is
/// called; a provider only ever sees literal values plus the validation
/// callback it must invoke on candidate input.
#[derive(Debug, Clone)]
pub struct TextConfig {
    pub name: String,
    pub title: String,
    pub password: bool,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub prompt: Option<String>,
    pub step: usize,
    pub total_steps: usize,
    pub validation: Option<Validation>,
}

/// Configuration for a single-select interaction.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub name: String,
    pub title: String,
    /// The resolved candidate list (dynamic options already evaluated).
    pub options: SelectOptions,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub prompt: Option<String>,
    /// Answer with the full `OptionItem` instead of its id.
    pub return_object: bool,
    pub step: usize,
    pub total_steps: usize,
    pub validation: Option<Validation>,
}

/// Configuration for a multi-select interaction.
#[derive(Debug, Clone)]
pub struct MultiSelectConfig {
    pub name: String,
    pub title: String,
    pub options: SelectOptions,
    pub default: Option<Vec<String>>,
    pub placeholder: Option<String>,
    pub prompt: Option<String>,
    pub return_object: bool,
    pub step: usize,
    pub total_steps: usize,
    pub validation: Option<Validation>,
    /// Invoked on every change of the selected set; may rewrite it.
    pub on_selection_change: Option<SelectionChangeHook>,
}

/// Configuration for a single file picker interaction.
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub name: String,
    pub title: String,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub prompt: Option<String>,
    /// Extension filters by human readable label.
    pub filters: Option<HashMap<String, Vec<String>>>,
    pub step: usize,
    pub total_steps: usize,
    pub validation: Option<Validation>,
}

/// Configuration for a multiple file picker interaction.
#[derive(Debug, Clone)]
pub struct FilesConfig {
    pub name: String,
    pub title: String,
    pub default: Option<Vec<String>>,
    pub placeholder: Option<String>,
    pub prompt: Option<String>,
    pub step: usize,
    pub total_steps: usize,
    pub validation: Option<Validation>,
}

/// Configuration for a folder picker interaction.
#[derive(Debug, Clone)]
pub struct FolderConfig {
    pub name: String,
    pub title: String,
    pub default: Option<String>,
    pub placeholder: Option<String>,
    pub prompt: Option<String>,
    pub step: usize,
    pub total_steps: usize,
    pub validation: Option<Validation>,
}

/// Configuration for a yes/no confirmation interaction.
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    pub name: String,
    pub title: String,
    pub default: Option<bool>,
    pub step: usize,
    pub total_steps: usize,
}

/// The asynchronous boundary the engine calls into for each concrete
/// question kind.
///
/// Exactly one interaction is ever in flight: the engine suspends at each
/// call until it resolves, then resumes. Providers handle validation
/// internally in retry loops: a `Success` result must already have passed
/// the config's validation callback. Provider-side failures are reported
/// as `FlowError::Provider`.
#[async_trait]
pub trait UiProvider: Send + Sync {
    async fn select_one(
        &self,
        config: SelectConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError>;

    async fn select_many(
        &self,
        config: MultiSelectConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError>;

    async fn input_text(
        &self,
        config: TextConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError>;

    async fn select_file(
        &self,
        config: FileConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError>;

    async fn select_files(
        &self,
        config: FilesConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError>;

    async fn select_folder(
        &self,
        config: FolderConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError>;

    async fn confirm(
        &self,
        config: ConfirmConfig,
        inputs: &Inputs,
    ) -> Result<InputResult, FlowError>;
}
