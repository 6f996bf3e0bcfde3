/// Terminal error type for a question-flow traversal.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The user backed out past the first question or chose cancel.
    ///
    /// This is a normal terminal outcome, not a failure; callers discard
    /// the accumulated answers and should not show an error banner.
    #[error("flow cancelled by user")]
    Cancelled,

    /// A selection question resolved to an empty candidate list.
    ///
    /// No valid answer is obtainable, so the whole walk aborts; this
    /// indicates a malformed tree or a broken dynamic-options callback.
    #[error("question '{0}' resolved to an empty option list")]
    EmptySelectOptions(String),

    /// A dynamic-value or function-question callback failed.
    ///
    /// Callback failures are programming errors in the tree definition;
    /// they are propagated, never caught and recovered from.
    #[error("callback for question '{name}' failed: {source}")]
    Callback {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The UI provider reported a failure descriptor.
    #[error("ui provider error: {0}")]
    Provider(#[from] anyhow::Error),
}

impl FlowError {
    /// Wrap a callback failure for the named question.
    pub fn callback(name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Callback {
            name: name.into(),
            source,
        }
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Stable category name for upstream display and telemetry.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cancelled => "UserCancel",
            Self::EmptySelectOptions(_) => "EmptySelectOption",
            Self::Callback { .. } => "CallbackError",
            Self::Provider(_) => "ProviderError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_names() {
        assert_eq!(FlowError::Cancelled.name(), "UserCancel");
        assert_eq!(
            FlowError::EmptySelectOptions("q".to_string()).name(),
            "EmptySelectOption"
        );
    }

    #[test]
    fn cancelled_predicate() {
        assert!(FlowError::Cancelled.is_cancelled());
        assert!(!FlowError::EmptySelectOptions("q".to_string()).is_cancelled());
    }
}
