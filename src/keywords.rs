use serde::{Deserialize, Serialize};

// ── Types ─────────────────────────────────────────────

/// A keyword staged for removal, waiting for the user to confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDeletion {
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    OutOfRange { index: usize, len: usize },
    NothingStaged,
    /// The staged entry moved or changed before the removal was confirmed.
    Stale { index: usize },
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            Self::NothingStaged => write!(f, "no entry is staged for removal"),
            Self::Stale { index } => write!(f, "staged entry at index {} has changed", index),
        }
    }
}

/// Ordered, user-editable list of strings. Duplicates are allowed; entries are identified by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableList {
    items: Vec<String>,
    #[serde(skip)]
    pending: Option<PendingDeletion>,
}

/// Keywords fed by keyword generation and edited by the user.
pub type KeywordList = EditableList;

/// Audience suggestions; displayed read-only but shares the list shape.
pub type AudienceSuggestionList = EditableList;

impl EditableList {
    pub fn from_items(items: Vec<String>) -> Self {
        Self { items, pending: None }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref()
    }

    /// Replace the whole list (a fresh parse result). Any staged removal is dropped.
    pub fn reset(&mut self, items: Vec<String>) {
        self.items = items;
        self.pending = None;
    }

    pub fn append(&mut self, value: impl Into<String>) -> &[String] {
        self.items.push(value.into());
        &self.items
    }

    pub fn replace_at(&mut self, index: usize, value: impl Into<String>) -> Result<&[String], ListError> {
        self.check(index)?;
        self.items[index] = value.into();
        Ok(&self.items)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<&[String], ListError> {
        self.check(index)?;
        self.items.remove(index);
        Ok(&self.items)
    }

    /// Stage `index` for removal. Replaces any earlier stage.
    pub fn stage_removal(&mut self, index: usize) -> Result<&PendingDeletion, ListError> {
        self.check(index)?;
        let value = self.items[index].clone();
        Ok(self.pending.insert(PendingDeletion { index, value }))
    }

    /// Remove the staged entry. The stage is cleared whether or not the removal happens.
    pub fn confirm_removal(&mut self) -> Result<String, ListError> {
        let staged = self.pending.take().ok_or(ListError::NothingStaged)?;
        if self.items.get(staged.index).map(String::as_str) != Some(staged.value.as_str()) {
            return Err(ListError::Stale { index: staged.index });
        }
        Ok(self.items.remove(staged.index))
    }

    pub fn cancel_removal(&mut self) -> Option<PendingDeletion> {
        self.pending.take()
    }

    /// Comma-separated rendering used when the list is merged back into a prompt.
    pub fn joined(&self) -> String {
        self.items.join(", ")
    }

    fn check(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}
