use serde::{Deserialize, Serialize};

/// Fewest styles the quiz accepts before analysis
pub const MIN_SELECTED_STYLES: usize = 5;
/// Most styles the quiz will hold
pub const MAX_SELECTED_STYLES: usize = 10;

/// Ordered, duplicate-free set of picked style option ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSelection {
    ids: Vec<String>,
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEffect {
    Added,
    Removed,
    /// Selection was full; nothing changed.
    Ignored,
}

impl StyleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, otherwise append it unless the selection is full
    pub fn toggle(&mut self, id: &str) -> ToggleEffect {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            return ToggleEffect::Removed;
        }

        if self.ids.len() >= MAX_SELECTED_STYLES {
            return ToggleEffect::Ignored;
        }

        self.ids.push(id.to_string());
        ToggleEffect::Added
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Enough styles picked to run the analysis
    pub fn is_ready(&self) -> bool {
        self.ids.len() >= MIN_SELECTED_STYLES
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
