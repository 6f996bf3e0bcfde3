//! The stack-based depth-first traversal engine.
//!
//! The walk must support arbitrary backward jumps, which recursion cannot
//! express cleanly, so it is modeled as an explicit pending stack plus a
//! history stack and a parent map. The borrowed tree is flattened into an
//! index arena up front; all per-node state (resolved values, skip
//! marks) lives in engine-local maps keyed by node index, and the final
//! answers in the caller's `Inputs` map.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use questree_types::{
    AnswerValue, DynamicValue, FlowError, Inputs, NodePayload, QTreeNode, Question, QuestionKind,
};

use crate::options::{self, OptionResolution};
use crate::provider::{
    ConfirmConfig, FileConfig, FilesConfig, FolderConfig, InputResult, MultiSelectConfig,
    SelectConfig, TextConfig, UiProvider,
};

/// Walk the question tree rooted at `root`, collecting answers into
/// `inputs` through `provider`.
///
/// Returns `Ok(())` when every active question has been answered,
/// `Err(FlowError::Cancelled)` when the user backs out, and any other
/// `FlowError` on a system failure. On an error outcome the answer map is
/// left as accumulated so far; callers persist or discard it based on the
/// result.
pub async fn traverse(
    root: &QTreeNode,
    inputs: &mut Inputs,
    provider: &dyn UiProvider,
) -> Result<(), FlowError> {
    Traversal::new(root).run(inputs, provider).await
}

/// The tree flattened into preorder indices with explicit parent and
/// child links.
struct Arena<'a> {
    nodes: Vec<&'a QTreeNode>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
}

impl<'a> Arena<'a> {
    fn collect(root: &'a QTreeNode) -> Self {
        let mut arena = Self {
            nodes: Vec::new(),
            parent: Vec::new(),
            children: Vec::new(),
        };
        arena.add(root, None);
        arena
    }

    fn add(&mut self, node: &'a QTreeNode, parent: Option<usize>) {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.parent.push(parent);
        self.children.push(Vec::new());
        if let Some(parent) = parent {
            self.children[parent].push(id);
        }
        for child in node.children() {
            self.add(child, Some(id));
        }
    }
}

/// Outcome of visiting one question node.
enum Visit {
    Answered {
        value: AnswerValue,
        /// The value was assigned without manual input (single-option
        /// auto-skip or a provider `Skip`).
        skipped: bool,
    },
    Back,
    Cancel,
}

struct Traversal<'a> {
    arena: Arena<'a>,
    /// Nodes awaiting visitation (LIFO).
    pending: Vec<usize>,
    /// Nodes already visited, in visitation order; consumed by back-navigation.
    history: Vec<usize>,
    /// Normalized resolved value per node, for child-condition evaluation.
    values: HashMap<usize, AnswerValue>,
    /// Nodes whose answer was assigned without manual input, excluded
    /// from step counting and from back targets.
    skipped: HashSet<usize>,
    /// Count of manual, non-skipped, non-function successes.
    manual_steps: usize,
}

impl<'a> Traversal<'a> {
    fn new(root: &'a QTreeNode) -> Self {
        Self {
            arena: Arena::collect(root),
            pending: vec![0],
            history: Vec::new(),
            values: HashMap::new(),
            skipped: HashSet::new(),
            manual_steps: 0,
        }
    }

    async fn run(
        mut self,
        inputs: &mut Inputs,
        provider: &dyn UiProvider,
    ) -> Result<(), FlowError> {
        while let Some(id) = self.pending.pop() {
            let node = self.arena.nodes[id];
            match node.data() {
                NodePayload::Group(_) => {
                    // a group's resolved value is inherited from its parent,
                    // so grandchildren conditions still see the answer that
                    // activated the group
                    if let Some(parent) = self.arena.parent[id]
                        && let Some(value) = self.values.get(&parent).cloned()
                    {
                        self.values.insert(id, value);
                    }
                    self.history.push(id);
                    self.push_active_children(id);
                }
                NodePayload::Question(question) => {
                    let step = self.manual_steps + 1;
                    let total_steps = step + self.pending.len();
                    match visit(question, provider, inputs, step, total_steps).await? {
                        Visit::Cancel => {
                            debug!("flow cancelled at question '{}'", question.name());
                            return Err(FlowError::Cancelled);
                        }
                        Visit::Back => {
                            debug!("back requested at question '{}'", question.name());
                            self.step_back(id, inputs)?;
                        }
                        Visit::Answered { value, skipped } => {
                            trace!(
                                "question '{}' answered (skipped: {skipped})",
                                question.name()
                            );
                            self.values.insert(id, value.normalized());
                            inputs.insert(question.name(), value);
                            if skipped {
                                self.skipped.insert(id);
                            } else if !question.is_function() {
                                self.manual_steps += 1;
                            }
                            self.history.push(id);
                            self.push_active_children(id);
                        }
                    }
                }
            }
        }
        debug!("question flow completed with {} answers", inputs.len());
        Ok(())
    }

    /// Push the condition-satisfying children of `id` in reverse declaration
    /// order, so the first declared satisfying child is popped next.
    fn push_active_children(&mut self, id: usize) {
        let value = self.values.get(&id).cloned();
        for &child in self.arena.children[id].iter().rev() {
            let node = self.arena.nodes[child];
            let active = match node.condition() {
                None => true,
                Some(condition) => condition.is_satisfied(value.as_ref()),
            };
            if active {
                self.pending.push(child);
            } else {
                trace!("pruning child {child}: condition not satisfied");
            }
        }
    }

    /// Undo history until the nearest prior manual question.
    ///
    /// The current node is re-pushed first, then history entries are popped
    /// one by one: each entry's still-pending children are dropped (they
    /// are reconstructed when the entry is answered again), the entry is
    /// re-pushed onto the pending stack and its answer deleted. The walk
    /// stops at the first entry that is neither a group, nor a function
    /// question, nor skip-valued; backing past the start of history
    /// cancels the whole flow.
    fn step_back(&mut self, current: usize, inputs: &mut Inputs) -> Result<(), FlowError> {
        self.pending.push(current);
        loop {
            let Some(prev) = self.history.pop() else {
                debug!("back past the first question, cancelling flow");
                return Err(FlowError::Cancelled);
            };
            while let Some(&top) = self.pending.last() {
                if self.arena.parent[top] == Some(prev) {
                    self.pending.pop();
                } else {
                    break;
                }
            }
            self.pending.push(prev);
            self.values.remove(&prev);
            let manual = match self.arena.nodes[prev].data() {
                NodePayload::Group(_) => false,
                NodePayload::Question(question) => {
                    inputs.remove(question.name());
                    // only nodes that incremented the counter may decrement it
                    !question.is_function() && !self.skipped.remove(&prev)
                }
            };
            if manual {
                self.manual_steps -= 1;
                return Ok(());
            }
        }
    }
}

async fn visit(
    question: &Question,
    provider: &dyn UiProvider,
    inputs: &Inputs,
    step: usize,
    total_steps: usize,
) -> Result<Visit, FlowError> {
    let name = question.name();

    // idempotent re-entry: a preset answer is taken as-is, no UI contact
    if let Some(existing) = inputs.get(name) {
        trace!("question '{name}' already answered, taking preset value");
        return Ok(Visit::Answered {
            value: existing.clone(),
            skipped: false,
        });
    }

    match question.kind() {
        QuestionKind::Func(func) => {
            let value = (func.callback)(inputs)
                .await
                .map_err(|e| FlowError::callback(name, e))?;
            Ok(Visit::Answered {
                value,
                skipped: false,
            })
        }
        QuestionKind::SingleSelect(select) => {
            match options::resolve_single(select, name, inputs).await? {
                OptionResolution::AutoSkip(value) => {
                    debug!("auto-skipping single-option question '{name}'");
                    Ok(Visit::Answered {
                        value,
                        skipped: true,
                    })
                }
                OptionResolution::Ask(resolved) => {
                    let config = SelectConfig {
                        name: name.to_string(),
                        title: resolve_title(question, inputs).await?,
                        options: resolved,
                        default: resolve_field(&select.default, name, inputs).await?,
                        placeholder: resolve_field(&select.placeholder, name, inputs).await?,
                        prompt: resolve_field(&select.prompt, name, inputs).await?,
                        return_object: select.return_object,
                        step,
                        total_steps,
                        validation: select.validation.clone(),
                    };
                    Ok(as_visit(provider.select_one(config, inputs).await?))
                }
            }
        }
        QuestionKind::MultiSelect(select) => {
            match options::resolve_multi(select, name, inputs).await? {
                OptionResolution::AutoSkip(value) => {
                    debug!("auto-skipping single-option question '{name}'");
                    Ok(Visit::Answered {
                        value,
                        skipped: true,
                    })
                }
                OptionResolution::Ask(resolved) => {
                    let config = MultiSelectConfig {
                        name: name.to_string(),
                        title: resolve_title(question, inputs).await?,
                        options: resolved,
                        default: resolve_field(&select.default, name, inputs).await?,
                        placeholder: resolve_field(&select.placeholder, name, inputs).await?,
                        prompt: resolve_field(&select.prompt, name, inputs).await?,
                        return_object: select.return_object,
                        step,
                        total_steps,
                        validation: select.validation.clone(),
                        on_selection_change: select.on_selection_change.clone(),
                    };
                    Ok(as_visit(provider.select_many(config, inputs).await?))
                }
            }
        }
        QuestionKind::Text(text) => {
            let config = TextConfig {
                name: name.to_string(),
                title: resolve_title(question, inputs).await?,
                password: text.password,
                default: resolve_field(&text.default, name, inputs).await?,
                placeholder: resolve_field(&text.placeholder, name, inputs).await?,
                prompt: resolve_field(&text.prompt, name, inputs).await?,
                step,
                total_steps,
                validation: text.validation.clone(),
            };
            Ok(as_visit(provider.input_text(config, inputs).await?))
        }
        QuestionKind::SingleFile(file) => {
            let config = FileConfig {
                name: name.to_string(),
                title: resolve_title(question, inputs).await?,
                default: resolve_field(&file.default, name, inputs).await?,
                placeholder: resolve_field(&file.placeholder, name, inputs).await?,
                prompt: resolve_field(&file.prompt, name, inputs).await?,
                filters: file.filters.clone(),
                step,
                total_steps,
                validation: file.validation.clone(),
            };
            Ok(as_visit(provider.select_file(config, inputs).await?))
        }
        QuestionKind::MultiFile(files) => {
            let config = FilesConfig {
                name: name.to_string(),
                title: resolve_title(question, inputs).await?,
                default: resolve_field(&files.default, name, inputs).await?,
                placeholder: resolve_field(&files.placeholder, name, inputs).await?,
                prompt: resolve_field(&files.prompt, name, inputs).await?,
                step,
                total_steps,
                validation: files.validation.clone(),
            };
            Ok(as_visit(provider.select_files(config, inputs).await?))
        }
        QuestionKind::Folder(folder) => {
            let config = FolderConfig {
                name: name.to_string(),
                title: resolve_title(question, inputs).await?,
                default: resolve_field(&folder.default, name, inputs).await?,
                placeholder: resolve_field(&folder.placeholder, name, inputs).await?,
                prompt: resolve_field(&folder.prompt, name, inputs).await?,
                step,
                total_steps,
                validation: folder.validation.clone(),
            };
            Ok(as_visit(provider.select_folder(config, inputs).await?))
        }
        QuestionKind::Confirm(confirm) => {
            let config = ConfirmConfig {
                name: name.to_string(),
                title: resolve_title(question, inputs).await?,
                default: resolve_field(&confirm.default, name, inputs).await?,
                step,
                total_steps,
            };
            Ok(as_visit(provider.confirm(config, inputs).await?))
        }
    }
}

fn as_visit(result: InputResult) -> Visit {
    match result {
        InputResult::Success(value) => Visit::Answered {
            value,
            skipped: false,
        },
        InputResult::Skip(value) => Visit::Answered {
            value,
            skipped: true,
        },
        InputResult::Back => Visit::Back,
        InputResult::Cancel => Visit::Cancel,
    }
}

async fn resolve_title(question: &Question, inputs: &Inputs) -> Result<String, FlowError> {
    question
        .title()
        .resolve(inputs)
        .await
        .map_err(|e| FlowError::callback(question.name(), e))
}

async fn resolve_field<T>(
    field: &Option<DynamicValue<T>>,
    name: &str,
    inputs: &Inputs,
) -> Result<Option<T>, FlowError>
where
    T: Clone + Send + 'static,
{
    match field {
        Some(value) => Ok(Some(
            value
                .resolve(inputs)
                .await
                .map_err(|e| FlowError::callback(name, e))?,
        )),
        None => Ok(None),
    }
}
