use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::{AnswerValue, Inputs};

type ValidationCallback = Arc<
    dyn for<'a> Fn(&'a AnswerValue, &'a Inputs) -> BoxFuture<'a, Option<String>> + Send + Sync,
>;

/// An answer validation predicate.
///
/// Returns `None` to accept the candidate value, or `Some(message)` as a
/// re-prompt hint. The engine hands the predicate to the UI provider, which
/// keeps the same interaction open until a valid value is supplied or the
/// user backs out; a validation failure never terminates the traversal.
#[derive(Clone)]
pub struct Validation {
    callback: ValidationCallback,
}

impl Validation {
    /// Wrap a synchronous predicate.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&AnswerValue, &Inputs) -> Option<String> + Send + Sync + 'static,
    {
        let callback: ValidationCallback = Arc::new(move |value, inputs| {
            let result = f(value, inputs);
            Box::pin(std::future::ready(result)) as BoxFuture<'_, Option<String>>
        });
        Self { callback }
    }

    /// Wrap an asynchronous predicate.
    pub fn with_async<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a AnswerValue, &'a Inputs) -> BoxFuture<'a, Option<String>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            callback: Arc::new(f),
        }
    }

    /// Check a candidate value against the answers collected so far.
    pub async fn check(&self, value: &AnswerValue, inputs: &Inputs) -> Option<String> {
        (self.callback)(value, inputs).await
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation(..)")
    }
}
