//! Calculation form draft
//!
//! The quote form is decorative: its fields are recorded as typed but never
//! validated, and requesting a quote does not depend on them.

use serde::{Deserialize, Serialize};

/// Packaging preselected on a fresh form
pub const DEFAULT_PACKAGING: &str = "Box";

/// Contents of the calculation form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationDraft {
    /// Sender location text
    pub sender_location: String,
    /// Receiver location text
    pub receiver_location: String,
    /// Approximate weight text
    pub approx_weight: String,
    /// Packaging choice
    pub packaging: String,
    /// Selected goods category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
}

impl Default for CalculationDraft {
    fn default() -> Self {
        Self {
            sender_location: String::new(),
            receiver_location: String::new(),
            approx_weight: String::new(),
            packaging: DEFAULT_PACKAGING.to_string(),
            selected_category: None,
        }
    }
}

impl CalculationDraft {
    /// Empty form with a category already selected
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            selected_category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Select `name`, replacing any previous selection
    pub fn select_category(&mut self, name: &str) {
        if !self.is_selected(name) {
            self.selected_category = Some(name.to_string());
        }
    }

    /// Whether `name` is the selected category
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_category.as_deref() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = CalculationDraft::default();
        assert_eq!(draft.packaging, "Box");
        assert!(draft.sender_location.is_empty());
        assert!(draft.selected_category.is_none());
    }

    #[test]
    fn test_select_category() {
        let mut draft = CalculationDraft::default();

        draft.select_category("Glass");
        assert!(draft.is_selected("Glass"));

        draft.select_category("Food");
        assert!(draft.is_selected("Food"));
        assert!(!draft.is_selected("Glass"));

        // Selecting again keeps the selection
        draft.select_category("Food");
        assert_eq!(draft.selected_category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_with_category() {
        let draft = CalculationDraft::with_category("Electronic");
        assert!(draft.is_selected("Electronic"));
        assert_eq!(draft.packaging, DEFAULT_PACKAGING);
    }
}
