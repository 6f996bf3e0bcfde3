//! # questree
//!
//! An interactive question-flow traversal engine. Walks a tree of dependent
//! prompts, decides at runtime which nodes are active, asks a pluggable
//! asynchronous [`UiProvider`] to collect a value for each, records answers
//! into a shared [`Inputs`] map, and supports "go back" semantics that undo
//! previously collected answers consistently.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use questree::{traverse, Condition, Inputs, QTreeNode, Question};
//!
//! let mut root = QTreeNode::new(Question::single_select(
//!     "capability",
//!     "Select a capability",
//!     vec!["bot", "tab"],
//! ));
//! root.add_child(
//!     QTreeNode::new(Question::text("bot-id", "Enter the bot id"))
//!         .with_condition(Condition::equals("bot")),
//! );
//!
//! let mut inputs = Inputs::new();
//! traverse(&root, &mut inputs, &my_provider).await?;
//! ```
//!
//! Rendering is the provider's concern: one crate per UI toolkit implements
//! [`UiProvider`], and the bundled [`TestProvider`] drives flows from a
//! script for tests.

// Re-export all types from questree-types
pub use questree_types::*;

mod provider;
pub use provider::{
    ConfirmConfig, FileConfig, FilesConfig, FolderConfig, InputResult, MultiSelectConfig,
    SelectConfig, TextConfig, UiProvider,
};

mod options;
pub use options::{OptionResolution, load_options, single_select_answer};

mod engine;
pub use engine::traverse;

// Scripted provider for testing flows without user interaction
mod test_provider;
pub use test_provider::{Interaction, TestProvider};
