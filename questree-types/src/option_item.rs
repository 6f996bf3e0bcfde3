/// One candidate in a selection question.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    /// Unique identifier of the option within its question.
    pub id: String,

    /// Human readable display name.
    pub label: String,

    /// Short extra text rendered next to the label.
    pub description: Option<String>,

    /// Longer explanation rendered below the option.
    pub detail: Option<String>,
}

impl OptionItem {
    /// Create a new option with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            detail: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// The candidate list of a selection question.
///
/// Either a list of plain labels (where the label doubles as the id) or a
/// list of full `OptionItem`s.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOptions {
    Labels(Vec<String>),
    Items(Vec<OptionItem>),
}

impl SelectOptions {
    /// Number of candidates.
    pub fn len(&self) -> usize {
        match self {
            Self::Labels(l) => l.len(),
            Self::Items(i) => i.len(),
        }
    }

    /// Whether the candidate list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ids of all candidates, in declaration order.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Labels(l) => l.iter().map(String::as_str).collect(),
            Self::Items(i) => i.iter().map(|item| item.id.as_str()).collect(),
        }
    }

    /// Whether a candidate with the given id exists.
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids().contains(&id)
    }
}

impl From<Vec<String>> for SelectOptions {
    fn from(labels: Vec<String>) -> Self {
        Self::Labels(labels)
    }
}

impl From<Vec<&str>> for SelectOptions {
    fn from(labels: Vec<&str>) -> Self {
        Self::Labels(labels.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<OptionItem>> for SelectOptions {
    fn from(items: Vec<OptionItem>) -> Self {
        Self::Items(items)
    }
}
