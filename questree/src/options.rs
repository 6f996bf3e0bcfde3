//! Candidate resolution for selection questions.
//!
//! Resolves a selection question's candidate list from its static list or
//! its dynamic-options callback, detects the single-candidate auto-skip
//! case, and turns the sole candidate into an answer value.

use questree_types::{
    AnswerValue, DynamicValue, FlowError, Inputs, MultiSelectQuestion, SelectOptions,
    SelectQuestion,
};

/// Outcome of resolving a selection question's candidates.
#[derive(Debug, Clone)]
pub enum OptionResolution {
    /// Assign this answer without contacting the UI provider.
    AutoSkip(AnswerValue),

    /// Ask the provider with this resolved candidate list.
    Ask(SelectOptions),
}

/// Resolve a candidate list: the dynamic-options callback takes priority
/// over the static list and is re-evaluated at every visitation.
pub async fn load_options(
    static_options: &SelectOptions,
    dynamic_options: Option<&DynamicValue<SelectOptions>>,
    name: &str,
    inputs: &Inputs,
) -> Result<SelectOptions, FlowError> {
    let resolved = match dynamic_options {
        Some(dynamic) => dynamic
            .resolve(inputs)
            .await
            .map_err(|e| FlowError::callback(name, e))?,
        None => static_options.clone(),
    };
    if resolved.is_empty() {
        // a hard stop: no valid answer is obtainable for this question
        return Err(FlowError::EmptySelectOptions(name.to_string()));
    }
    Ok(resolved)
}

/// Resolve candidates for a single-select question.
///
/// Auto-skip applies when the question is marked `skip_single` and the
/// *declared static* list has exactly one candidate; the assigned value
/// still comes from the resolved list.
pub(crate) async fn resolve_single(
    select: &SelectQuestion,
    name: &str,
    inputs: &Inputs,
) -> Result<OptionResolution, FlowError> {
    let resolved = load_options(
        &select.static_options,
        select.dynamic_options.as_ref(),
        name,
        inputs,
    )
    .await?;
    if select.skip_single
        && select.static_options.len() == 1
        && let Some(answer) = single_select_answer(&resolved, select.return_object)
    {
        return Ok(OptionResolution::AutoSkip(answer));
    }
    Ok(OptionResolution::Ask(resolved))
}

/// Resolve candidates for a multi-select question. Same auto-skip rule as
/// [`resolve_single`]; the assigned value is a one-element list.
pub(crate) async fn resolve_multi(
    select: &MultiSelectQuestion,
    name: &str,
    inputs: &Inputs,
) -> Result<OptionResolution, FlowError> {
    let resolved = load_options(
        &select.static_options,
        select.dynamic_options.as_ref(),
        name,
        inputs,
    )
    .await?;
    if select.skip_single
        && select.static_options.len() == 1
        && let Some(answer) = multi_select_answer(&resolved, select.return_object)
    {
        return Ok(OptionResolution::AutoSkip(answer));
    }
    Ok(OptionResolution::Ask(resolved))
}

/// The answer a single-select yields when its sole candidate is taken:
/// the label, the item id, or the full item under `return_object`.
pub fn single_select_answer(options: &SelectOptions, return_object: bool) -> Option<AnswerValue> {
    match options {
        SelectOptions::Labels(labels) => labels.first().map(|l| AnswerValue::Text(l.clone())),
        SelectOptions::Items(items) => items.first().map(|item| {
            if return_object {
                AnswerValue::Item(item.clone())
            } else {
                AnswerValue::Text(item.id.clone())
            }
        }),
    }
}

/// Multi-select counterpart of [`single_select_answer`]: wraps the sole
/// candidate in a one-element list.
pub(crate) fn multi_select_answer(
    options: &SelectOptions,
    return_object: bool,
) -> Option<AnswerValue> {
    match options {
        SelectOptions::Labels(labels) => {
            labels.first().map(|l| AnswerValue::List(vec![l.clone()]))
        }
        SelectOptions::Items(items) => items.first().map(|item| {
            if return_object {
                AnswerValue::Items(vec![item.clone()])
            } else {
                AnswerValue::List(vec![item.id.clone()])
            }
        }),
    }
}
