//! View-state model
//!
//! Plain data describing what the user is looking at. The controller is the
//! only writer; everybody else receives snapshots.

use app_core::StatusGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculate::CalculationDraft;

/// Errors reported when a command cannot be applied
///
/// These are local rejections: the state is left untouched and the command
/// returns [`Transition::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// History tab index outside `0..4`
    #[error("History tab index out of range: {0}")]
    HistoryTabOutOfRange(usize),

    /// Command not available on the current screen
    #[error("{command} is not available on the {screen} screen")]
    InvalidTransition {
        /// Name of the rejected command
        command: &'static str,
        /// Screen the command was issued from
        screen: Screen,
    },
}

/// Outcome of a controller command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The state changed and subscribers were notified
    Changed,
    /// The command was valid but left the state as it was
    Unchanged,
    /// The command was refused; the state is untouched
    Rejected(StateError),
}

impl Transition {
    /// Whether the state changed
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed)
    }

    /// Whether the command was refused
    pub fn is_rejected(&self) -> bool {
        matches!(self, Transition::Rejected(_))
    }
}

// =============================================================================
// Screens & Navigation Items
// =============================================================================

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Tracking overview with search
    #[default]
    Tracking,
    /// Shipment history with status tabs
    ShipmentHistory,
    /// Quote calculation form
    Calculate,
    /// Quote confirmation
    Confirmation,
}

impl Screen {
    /// Short name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Tracking => "tracking",
            Screen::ShipmentHistory => "shipment history",
            Screen::Calculate => "calculate",
            Screen::Confirmation => "confirmation",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bottom navigation items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavItem {
    /// Home (tracking)
    #[default]
    Home,
    /// Quote calculation
    Calculate,
    /// Shipment history
    Shipment,
    /// Profile (no dedicated screen yet)
    Profile,
}

impl NavItem {
    /// Screen shown when this item is selected
    ///
    /// `Profile` has no screen of its own and falls back to tracking.
    pub fn target_screen(&self) -> Screen {
        match self {
            NavItem::Home => Screen::Tracking,
            NavItem::Calculate => Screen::Calculate,
            NavItem::Shipment => Screen::ShipmentHistory,
            NavItem::Profile => Screen::Tracking,
        }
    }

    /// All items in bottom-bar order
    pub fn all() -> [NavItem; 4] {
        [
            NavItem::Home,
            NavItem::Calculate,
            NavItem::Shipment,
            NavItem::Profile,
        ]
    }
}

// =============================================================================
// View State
// =============================================================================

/// Snapshot of the application's view-state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Screen currently shown
    pub screen: Screen,
    /// Highlighted bottom navigation item
    pub nav_item: NavItem,
    /// Selected shipment history tab
    pub history_tab: StatusGroup,
    /// Tracking search text
    pub search_query: String,
    /// Whether the tracking search has focus
    pub search_focused: bool,
    /// Calculation form contents
    pub calculation: CalculationDraft,
}

impl ViewState {
    /// Default state with a different history tab preselected
    pub fn with_history_tab(mut self, group: StatusGroup) -> Self {
        self.history_tab = group;
        self
    }

    /// Default state with a prefilled calculation form
    pub fn with_calculation(mut self, draft: CalculationDraft) -> Self {
        self.calculation = draft;
        self
    }

    /// Whether the bottom navigation bar is shown
    ///
    /// Only the unfocused tracking screen shows it.
    pub fn bottom_nav_visible(&self) -> bool {
        self.screen == Screen::Tracking && !self.search_focused
    }

    pub(crate) fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_focused = false;
    }

    pub(crate) fn go_home(&mut self) {
        self.screen = Screen::Tracking;
        self.nav_item = NavItem::Home;
    }
}
