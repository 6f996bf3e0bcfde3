use std::fmt;
use std::sync::Arc;

use crate::AnswerValue;

/// A custom condition predicate over the parent's normalized answer.
pub type ConditionFunc = Arc<dyn Fn(Option<&AnswerValue>) -> bool + Send + Sync>;

/// A predicate gating whether a child node is visited.
///
/// Conditions are always evaluated against the *direct parent's* resolved
/// answer in normalized form (option objects collapsed to plain ids), never
/// against a grandparent's or a sibling's. String conditions match `Text`
/// answers, the `Contains*` family matches `List` answers.
#[derive(Clone)]
pub enum Condition {
    /// The parent's answer equals this id.
    Equals(String),

    /// The parent's answer is one of these ids.
    OneOf(Vec<String>),

    /// The parent's answer starts with this prefix.
    StartsWith(String),

    /// The parent's answer ends with this suffix.
    EndsWith(String),

    /// A list answer contains this id (or a text answer this substring).
    Contains(String),

    /// A list answer contains at least one of these ids.
    ContainsAny(Vec<String>),

    /// A list answer contains all of these ids.
    ContainsAll(Vec<String>),

    /// A custom predicate.
    Func(ConditionFunc),
}

impl Condition {
    pub fn equals(id: impl Into<String>) -> Self {
        Self::Equals(id.into())
    }

    pub fn one_of(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::OneOf(ids.into_iter().map(Into::into).collect())
    }

    pub fn contains(id: impl Into<String>) -> Self {
        Self::Contains(id.into())
    }

    /// Wrap a custom predicate.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(Option<&AnswerValue>) -> bool + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Evaluate this condition against a parent's normalized answer.
    ///
    /// A missing parent value satisfies only `Func` conditions that accept it.
    pub fn is_satisfied(&self, value: Option<&AnswerValue>) -> bool {
        if let Self::Func(f) = self {
            return f(value);
        }
        let Some(value) = value else {
            return false;
        };
        match (self, value) {
            (Self::Equals(want), AnswerValue::Text(s)) => s == want,
            (Self::OneOf(ids), AnswerValue::Text(s)) => ids.contains(s),
            (Self::StartsWith(prefix), AnswerValue::Text(s)) => s.starts_with(prefix),
            (Self::EndsWith(suffix), AnswerValue::Text(s)) => s.ends_with(suffix),
            (Self::Contains(want), AnswerValue::Text(s)) => s.contains(want.as_str()),
            (Self::Contains(want), AnswerValue::List(l)) => l.contains(want),
            (Self::ContainsAny(ids), AnswerValue::List(l)) => ids.iter().any(|id| l.contains(id)),
            (Self::ContainsAll(ids), AnswerValue::List(l)) => ids.iter().all(|id| l.contains(id)),
            _ => false,
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals(id) => f.debug_tuple("Equals").field(id).finish(),
            Self::OneOf(ids) => f.debug_tuple("OneOf").field(ids).finish(),
            Self::StartsWith(s) => f.debug_tuple("StartsWith").field(s).finish(),
            Self::EndsWith(s) => f.debug_tuple("EndsWith").field(s).finish(),
            Self::Contains(id) => f.debug_tuple("Contains").field(id).finish(),
            Self::ContainsAny(ids) => f.debug_tuple("ContainsAny").field(ids).finish(),
            Self::ContainsAll(ids) => f.debug_tuple("ContainsAll").field(ids).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}
