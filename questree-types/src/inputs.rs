use std::collections::HashMap;

use crate::AnswerValue;

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(String),

    #[error("Type mismatch for '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The answer map shared across one traversal.
///
/// String-keyed by question name. The same map is visible to every
/// condition, default and validation callback during the traversal, so
/// later questions can depend on earlier answers. Each traversal must own
/// its map exclusively; the engine mutates it in place, including deleting
/// entries during back-navigation.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    values: HashMap<String, AnswerValue>,
}

impl Inputs {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer under the given question name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.values.get(name)
    }

    /// Whether a question has been answered.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove a question's answer.
    pub fn remove(&mut self, name: &str) -> Option<AnswerValue> {
        self.values.remove(name)
    }

    /// Iterate over all name-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }

    /// Number of recorded answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no answers have been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer, if present and of text shape.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AnswerValue::as_text)
    }

    /// Get a text answer or a typed error.
    pub fn require_text(&self, name: &str) -> Result<&str, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                name: name.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a list answer or a typed error.
    pub fn require_list(&self, name: &str) -> Result<&[String], AnswerError> {
        match self.get(name) {
            Some(AnswerValue::List(l)) => Ok(l),
            Some(other) => Err(AnswerError::TypeMismatch {
                name: name.to_string(),
                expected: "List",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a confirm answer or a typed error.
    pub fn require_bool(&self, name: &str) -> Result<bool, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Confirm(b)) => Ok(*b),
            Some(other) => Err(AnswerError::TypeMismatch {
                name: name.to_string(),
                expected: "Confirm",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }
}

impl IntoIterator for Inputs {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut inputs = Inputs::new();
        inputs.insert("name", "scaffold");
        inputs.insert("capabilities", vec!["bot", "tab"]);

        assert_eq!(inputs.get_text("name"), Some("scaffold"));
        assert_eq!(inputs.require_list("capabilities").unwrap().len(), 2);
        assert_eq!(inputs.len(), 2);
    }

    #[test]
    fn remove_deletes_answer() {
        let mut inputs = Inputs::new();
        inputs.insert("name", "x");
        assert!(inputs.remove("name").is_some());
        assert!(!inputs.contains("name"));
    }

    #[test]
    fn type_mismatch_error() {
        let mut inputs = Inputs::new();
        inputs.insert("flag", true);
        assert!(matches!(
            inputs.require_text("flag"),
            Err(AnswerError::TypeMismatch { .. })
        ));
        assert!(matches!(
            inputs.require_text("absent"),
            Err(AnswerError::Missing(_))
        ));
    }
}
