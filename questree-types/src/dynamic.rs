use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::Inputs;

/// A callback computing a value from the answers collected so far.
///
/// Callbacks are fallible; a failure aborts the whole traversal, since a
/// failing callback is a programming error in the tree definition rather
/// than an expected runtime condition.
pub type DynCallback<T> =
    Arc<dyn for<'a> Fn(&'a Inputs) -> BoxFuture<'a, anyhow::Result<T>> + Send + Sync>;

/// A configuration value that is either a literal or computed from the
/// current answers.
///
/// Titles, defaults, placeholders, prompts and dynamic option lists are all
/// `DynamicValue`s. They are resolved lazily at visitation time and never
/// cached, so later answers influence earlier-looking defaults correctly.
#[derive(Clone)]
pub enum DynamicValue<T> {
    Literal(T),
    Func(DynCallback<T>),
}

impl<T: Clone + Send + 'static> DynamicValue<T> {
    /// Wrap an asynchronous callback.
    pub fn func<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a Inputs) -> BoxFuture<'a, anyhow::Result<T>> + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Wrap a synchronous callback.
    pub fn compute<F>(f: F) -> Self
    where
        F: Fn(&Inputs) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        let callback: DynCallback<T> = Arc::new(move |inputs| {
            let result = f(inputs);
            Box::pin(std::future::ready(result)) as BoxFuture<'_, anyhow::Result<T>>
        });
        Self::Func(callback)
    }

    /// Resolve to a concrete value against the current answers.
    pub async fn resolve(&self, inputs: &Inputs) -> anyhow::Result<T> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Func(callback) => callback(inputs).await,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl<T> From<T> for DynamicValue<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for DynamicValue<String> {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}
