use crate::OptionItem;

/// A single answer collected for one question.
///
/// This is the value stored in `Inputs` for each answered question.
/// Selection questions may answer with full `OptionItem`s (when configured
/// with `return_object`); `normalized` collapses those to plain ids for
/// condition evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// A plain string (text input, file/folder paths, select ids).
    Text(String),

    /// A list of strings (multi-select ids, multi-file paths).
    List(Vec<String>),

    /// A full option object (single-select with `return_object`).
    Item(OptionItem),

    /// A list of full option objects (multi-select with `return_object`).
    Items(Vec<OptionItem>),

    /// A yes/no answer (confirm questions).
    Confirm(bool),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a string list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Confirm(b) => Some(*b),
            _ => None,
        }
    }

    /// The identifier carried by this answer, if it has a single one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Item(item) => Some(&item.id),
            _ => None,
        }
    }

    /// Collapse option objects to their plain ids.
    ///
    /// `Item` becomes `Text(id)` and `Items` becomes `List(ids)`; all other
    /// variants are returned unchanged. Conditions on child nodes are always
    /// evaluated against the normalized form of the parent's answer.
    pub fn normalized(&self) -> AnswerValue {
        match self {
            Self::Item(item) => Self::Text(item.id.clone()),
            Self::Items(items) => Self::List(items.iter().map(|i| i.id.clone()).collect()),
            other => other.clone(),
        }
    }

    /// Get the variant name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::List(_) => "List",
            Self::Item(_) => "Item",
            Self::Items(_) => "Items",
            Self::Confirm(_) => "Confirm",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(l: Vec<&str>) -> Self {
        Self::List(l.into_iter().map(str::to_string).collect())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Confirm(b)
    }
}

impl From<OptionItem> for AnswerValue {
    fn from(item: OptionItem) -> Self {
        Self::Item(item)
    }
}

impl From<Vec<OptionItem>> for AnswerValue {
    fn from(items: Vec<OptionItem>) -> Self {
        Self::Items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_normalizes_to_id() {
        let answer = AnswerValue::Item(OptionItem::new("rust", "Rust"));
        assert_eq!(answer.normalized(), AnswerValue::Text("rust".to_string()));
    }

    #[test]
    fn items_normalize_to_ids() {
        let answer = AnswerValue::Items(vec![
            OptionItem::new("a", "A"),
            OptionItem::new("b", "B"),
        ]);
        assert_eq!(
            answer.normalized(),
            AnswerValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn text_normalizes_to_itself() {
        let answer = AnswerValue::Text("x".to_string());
        assert_eq!(answer.normalized(), answer);
    }

    #[test]
    fn id_of_item_and_text() {
        assert_eq!(AnswerValue::from("x").id(), Some("x"));
        assert_eq!(AnswerValue::from(OptionItem::new("y", "Y")).id(), Some("y"));
        assert_eq!(AnswerValue::from(true).id(), None);
    }
}
