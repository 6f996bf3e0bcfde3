//! Core types for the questree crate.
//!
//! This crate provides the foundational types for defining question flows:
//! - `QTreeNode` - A tree of questions with activation conditions
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `Inputs` and `AnswerValue` - The collected answers
//! - `DynamicValue` and `Validation` - Lazily evaluated configuration
//! - `Condition` - Predicates that gate child questions on parent answers

mod answer_value;
pub use answer_value::AnswerValue;

mod option_item;
pub use option_item::{OptionItem, SelectOptions};

mod dynamic;
pub use dynamic::{DynCallback, DynamicValue};

mod validation;
pub use validation::Validation;

mod condition;
pub use condition::{Condition, ConditionFunc};

mod question;
pub use question::{
    ConfirmQuestion, FileQuestion, FilesQuestion, FolderQuestion, FuncQuestion,
    MultiSelectQuestion, Question, QuestionKind, SelectQuestion, SelectionChangeHook,
    TextQuestion,
};

mod tree;
pub use tree::{Group, NodePayload, QTreeNode};

mod inputs;
pub use inputs::{AnswerError, Inputs};

mod error;
pub use error::FlowError;
