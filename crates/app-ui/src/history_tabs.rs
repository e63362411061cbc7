//! Shipment history tab bar
//!
//! Badge counts use exact status matches, so the Pending badge does not
//! count Loading shipments even though the Pending tab lists them.

use app_core::repository::count_by_status;
use app_core::{Shipment, ShipmentStatus, StatusGroup};
use serde::{Deserialize, Serialize};

/// One tab of the shipment history tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTabBadge {
    /// Filter applied by the tab
    pub group: StatusGroup,
    /// Tab label
    pub label: String,
    /// Badge count
    pub count: usize,
    /// Whether the tab is selected
    pub selected: bool,
}

/// Build the four history tabs with badge counts over `shipments`
pub fn history_tabs(shipments: &[Shipment], selected: StatusGroup) -> Vec<HistoryTabBadge> {
    StatusGroup::all()
        .into_iter()
        .map(|group| HistoryTabBadge {
            group,
            label: group.label().to_string(),
            count: badge_count(shipments, group),
            selected: group == selected,
        })
        .collect()
}

fn badge_count(shipments: &[Shipment], group: StatusGroup) -> usize {
    match group {
        StatusGroup::All => shipments.len(),
        StatusGroup::Completed => count_by_status(shipments, ShipmentStatus::Completed),
        StatusGroup::InProgress => count_by_status(shipments, ShipmentStatus::InProgress),
        StatusGroup::Pending => count_by_status(shipments, ShipmentStatus::Pending),
    }
}
