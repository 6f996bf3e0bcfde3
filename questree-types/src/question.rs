use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::{AnswerValue, DynCallback, DynamicValue, Inputs, SelectOptions, Validation};

/// A single question in a flow.
#[derive(Debug, Clone)]
pub struct Question {
    /// The key under which the answer is stored in `Inputs`.
    ///
    /// Names need not be globally unique across a tree, but must be unique
    /// along any single activated path.
    name: String,

    /// The prompt text shown to the user.
    title: DynamicValue<String>,

    /// The kind of question (determines input type and configuration).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<DynamicValue<String>>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
        }
    }

    /// A text input question with no extra configuration.
    pub fn text(name: impl Into<String>, title: impl Into<DynamicValue<String>>) -> Self {
        Self::new(name, title, QuestionKind::Text(TextQuestion::default()))
    }

    /// A single-select question over a static candidate list.
    pub fn single_select(
        name: impl Into<String>,
        title: impl Into<DynamicValue<String>>,
        options: impl Into<SelectOptions>,
    ) -> Self {
        Self::new(
            name,
            title,
            QuestionKind::SingleSelect(SelectQuestion::new(options)),
        )
    }

    /// A multi-select question over a static candidate list.
    pub fn multi_select(
        name: impl Into<String>,
        title: impl Into<DynamicValue<String>>,
        options: impl Into<SelectOptions>,
    ) -> Self {
        Self::new(
            name,
            title,
            QuestionKind::MultiSelect(MultiSelectQuestion::new(options)),
        )
    }

    /// A single file picker question.
    pub fn single_file(name: impl Into<String>, title: impl Into<DynamicValue<String>>) -> Self {
        Self::new(name, title, QuestionKind::SingleFile(FileQuestion::default()))
    }

    /// A multiple file picker question.
    pub fn multi_file(name: impl Into<String>, title: impl Into<DynamicValue<String>>) -> Self {
        Self::new(name, title, QuestionKind::MultiFile(FilesQuestion::default()))
    }

    /// A folder picker question.
    pub fn folder(name: impl Into<String>, title: impl Into<DynamicValue<String>>) -> Self {
        Self::new(name, title, QuestionKind::Folder(FolderQuestion::default()))
    }

    /// A yes/no confirmation question.
    pub fn confirm(name: impl Into<String>, title: impl Into<DynamicValue<String>>) -> Self {
        Self::new(name, title, QuestionKind::Confirm(ConfirmQuestion::default()))
    }

    /// A non-interactive question whose answer is computed by an async
    /// callback against the answers collected so far.
    pub fn function<F>(name: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&'a Inputs) -> BoxFuture<'a, anyhow::Result<AnswerValue>>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        Self::new(
            name.clone(),
            name,
            QuestionKind::Func(FuncQuestion::new(f)),
        )
    }

    /// Like [`Question::function`], but for a synchronous callback.
    pub fn computed<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Inputs) -> anyhow::Result<AnswerValue> + Send + Sync + 'static,
    {
        let name = name.into();
        Self::new(
            name.clone(),
            name,
            QuestionKind::Func(FuncQuestion::from_fn(f)),
        )
    }

    /// Replace the kind configuration, keeping name and title.
    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Get the answer-map key of this question.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the prompt text (possibly dynamic).
    pub fn title(&self) -> &DynamicValue<String> {
        &self.title
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get a mutable reference to the question kind.
    pub fn kind_mut(&mut self) -> &mut QuestionKind {
        &mut self.kind
    }

    /// Whether this is a non-interactive function question.
    ///
    /// Function questions never count toward the visible step counter and
    /// are excluded from back-navigation targets.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, QuestionKind::Func(_))
    }

    /// Whether this is a selection question (single or multi).
    pub fn is_select(&self) -> bool {
        matches!(
            self.kind,
            QuestionKind::SingleSelect(_) | QuestionKind::MultiSelect(_)
        )
    }
}

/// The kind of question, determining input type and configuration.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Single-line text input.
    Text(TextQuestion),

    /// Choose exactly one option from a list.
    SingleSelect(SelectQuestion),

    /// Choose any number of options from a list.
    MultiSelect(MultiSelectQuestion),

    /// Pick one file.
    SingleFile(FileQuestion),

    /// Pick one or more files.
    MultiFile(FilesQuestion),

    /// Pick a folder.
    Folder(FolderQuestion),

    /// Yes/no confirmation.
    Confirm(ConfirmQuestion),

    /// Computed answer, no user interaction.
    Func(FuncQuestion),
}

/// Configuration for a text input question.
#[derive(Debug, Clone, Default)]
pub struct TextQuestion {
    /// Hide the input while typing (passwords).
    pub password: bool,

    /// Pre-filled value, possibly computed from prior answers.
    pub default: Option<DynamicValue<String>>,

    /// Placeholder shown in the empty input box.
    pub placeholder: Option<DynamicValue<String>>,

    /// Extra explanation shown with the prompt.
    pub prompt: Option<DynamicValue<String>>,

    /// Candidate validation; failures re-prompt within the same interaction.
    pub validation: Option<Validation>,
}

/// Configuration for a single-select question.
#[derive(Debug, Clone)]
pub struct SelectQuestion {
    /// The declared candidate list.
    pub static_options: SelectOptions,

    /// Computed candidate list; takes priority over `static_options`.
    pub dynamic_options: Option<DynamicValue<SelectOptions>>,

    /// Default selected id.
    pub default: Option<DynamicValue<String>>,

    pub placeholder: Option<DynamicValue<String>>,
    pub prompt: Option<DynamicValue<String>>,

    /// Auto-answer without prompting when the declared list has exactly one
    /// candidate.
    pub skip_single: bool,

    /// Answer with the full `OptionItem` instead of its id.
    pub return_object: bool,

    pub validation: Option<Validation>,
}

impl SelectQuestion {
    /// Create a new single-select over a static candidate list.
    pub fn new(options: impl Into<SelectOptions>) -> Self {
        Self {
            static_options: options.into(),
            dynamic_options: None,
            default: None,
            placeholder: None,
            prompt: None,
            skip_single: false,
            return_object: false,
            validation: None,
        }
    }
}

/// A hook invoked by the UI provider whenever the selected set of a
/// multi-select changes; it may rewrite the selection.
#[derive(Clone)]
pub struct SelectionChangeHook(
    Arc<dyn Fn(&HashSet<String>, &HashSet<String>) -> HashSet<String> + Send + Sync>,
);

impl SelectionChangeHook {
    /// Wrap a hook taking `(current, previous)` selected id sets.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&HashSet<String>, &HashSet<String>) -> HashSet<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Apply the hook to a selection change.
    pub fn apply(&self, current: &HashSet<String>, previous: &HashSet<String>) -> HashSet<String> {
        (self.0)(current, previous)
    }
}

impl fmt::Debug for SelectionChangeHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectionChangeHook(..)")
    }
}

/// Configuration for a multi-select question.
#[derive(Debug, Clone)]
pub struct MultiSelectQuestion {
    /// The declared candidate list.
    pub static_options: SelectOptions,

    /// Computed candidate list; takes priority over `static_options`.
    pub dynamic_options: Option<DynamicValue<SelectOptions>>,

    /// Default selected ids.
    pub default: Option<DynamicValue<Vec<String>>>,

    pub placeholder: Option<DynamicValue<String>>,
    pub prompt: Option<DynamicValue<String>>,

    /// Auto-answer without prompting when the declared list has exactly one
    /// candidate.
    pub skip_single: bool,

    /// Answer with the full `OptionItem`s instead of their ids.
    pub return_object: bool,

    /// Invoked by the provider when the selected set changes.
    pub on_selection_change: Option<SelectionChangeHook>,

    pub validation: Option<Validation>,
}

impl MultiSelectQuestion {
    /// Create a new multi-select over a static candidate list.
    pub fn new(options: impl Into<SelectOptions>) -> Self {
        Self {
            static_options: options.into(),
            dynamic_options: None,
            default: None,
            placeholder: None,
            prompt: None,
            skip_single: false,
            return_object: false,
            on_selection_change: None,
            validation: None,
        }
    }
}

/// Configuration for a single file picker question.
#[derive(Debug, Clone, Default)]
pub struct FileQuestion {
    pub default: Option<DynamicValue<String>>,
    pub placeholder: Option<DynamicValue<String>>,
    pub prompt: Option<DynamicValue<String>>,

    /// Extension filters by human readable label, e.g. `"Images" => ["png"]`.
    pub filters: Option<HashMap<String, Vec<String>>>,

    pub validation: Option<Validation>,
}

/// Configuration for a multiple file picker question.
#[derive(Debug, Clone, Default)]
pub struct FilesQuestion {
    pub default: Option<DynamicValue<Vec<String>>>,
    pub placeholder: Option<DynamicValue<String>>,
    pub prompt: Option<DynamicValue<String>>,
    pub validation: Option<Validation>,
}

/// Configuration for a folder picker question.
#[derive(Debug, Clone, Default)]
pub struct FolderQuestion {
    pub default: Option<DynamicValue<String>>,
    pub placeholder: Option<DynamicValue<String>>,
    pub prompt: Option<DynamicValue<String>>,
    pub validation: Option<Validation>,
}

/// Configuration for a yes/no confirmation question.
#[derive(Debug, Clone, Default)]
pub struct ConfirmQuestion {
    pub default: Option<DynamicValue<bool>>,
}

/// Configuration for a computed (function) question.
#[derive(Clone)]
pub struct FuncQuestion {
    /// Invoked with the answers collected so far; its result becomes the
    /// answer without any UI interaction.
    pub callback: DynCallback<AnswerValue>,
}

impl FuncQuestion {
    /// Wrap an asynchronous callback.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a Inputs) -> BoxFuture<'a, anyhow::Result<AnswerValue>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            callback: Arc::new(f),
        }
    }

    /// Wrap a synchronous callback.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Inputs) -> anyhow::Result<AnswerValue> + Send + Sync + 'static,
    {
        let callback: DynCallback<AnswerValue> = Arc::new(move |inputs| {
            let result = f(inputs);
            Box::pin(std::future::ready(result)) as BoxFuture<'_, anyhow::Result<AnswerValue>>
        });
        Self { callback }
    }
}

impl fmt::Debug for FuncQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncQuestion").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_question_is_flagged() {
        let question = Question::computed("answers", |_| Ok(AnswerValue::from("x")));
        assert!(question.is_function());
        assert!(!question.is_select());
    }

    #[test]
    fn select_constructors() {
        let question = Question::single_select("language", "Pick a language", vec!["rust", "go"]);
        assert!(question.is_select());
        let QuestionKind::SingleSelect(select) = question.kind() else {
            panic!("expected a single select");
        };
        assert_eq!(select.static_options.len(), 2);
        assert!(!select.skip_single);
    }

    #[test]
    fn selection_change_hook_applies() {
        let hook = SelectionChangeHook::new(|current, _previous| {
            let mut next = current.clone();
            next.insert("always".to_string());
            next
        });
        let current = HashSet::from(["a".to_string()]);
        let next = hook.apply(&current, &HashSet::new());
        assert!(next.contains("always"));
        assert!(next.contains("a"));
    }
}
