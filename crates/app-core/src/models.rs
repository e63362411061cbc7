//! Shipment data model
//!
//! Value types describing shipments, vehicle types and shipment categories.
//! All of them are immutable once built; the only way to obtain a modified
//! shipment is to build a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Shipment Status
// =============================================================================

/// Lifecycle status of a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentStatus {
    /// On its way to the receiver
    InProgress,
    /// Waiting to be picked up
    Pending,
    /// Being loaded onto a vehicle
    Loading,
    /// Delivered
    Completed,
}

impl ShipmentStatus {
    /// Stable display label for this status
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::InProgress => "in-progress",
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::Loading => "loading",
            ShipmentStatus::Completed => "completed",
        }
    }

    /// Colour associated with this status, as a `#RRGGBB` hex string
    pub fn color(&self) -> &'static str {
        match self {
            ShipmentStatus::InProgress | ShipmentStatus::Completed => "#4CAF50",
            ShipmentStatus::Pending => "#E58234",
            ShipmentStatus::Loading => "#2196F3",
        }
    }

    /// All statuses in declaration order
    pub fn all() -> [ShipmentStatus; 4] {
        [
            ShipmentStatus::InProgress,
            ShipmentStatus::Pending,
            ShipmentStatus::Loading,
            ShipmentStatus::Completed,
        ]
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Shipment
// =============================================================================

/// A single parcel in transit
///
/// Fields are private so that `id` and `tracking_number` cannot change once
/// the shipment exists. Optional fields are attached with the `with_*`
/// builder methods while the value is being constructed.
///
/// # Example
///
/// ```rust
/// use app_core::models::{Shipment, ShipmentStatus};
///
/// let shipment = Shipment::new("1", "NEJ20089934122231", "Atlanta", "Chicago", ShipmentStatus::InProgress)
///     .with_name("Summer linen jacket")
///     .with_amount(1400.0);
///
/// assert_eq!(shipment.id(), "1");
/// assert_eq!(shipment.amount(), Some(1400.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    id: String,
    tracking_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    from: String,
    to: String,
    status: ShipmentStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_amount"
    )]
    amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_delivery: Option<String>,
}

/// Read an optional price, clamping negative values to zero like
/// [`Shipment::with_amount`]
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let amount = Option::<f64>::deserialize(deserializer)?;
    Ok(amount.map(|a| a.max(0.0)))
}

impl Shipment {
    /// Create a shipment with its required fields
    pub fn new(
        id: impl Into<String>,
        tracking_number: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        status: ShipmentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            tracking_number: tracking_number.into(),
            name: None,
            from: from.into(),
            to: to.into(),
            status,
            amount: None,
            date: None,
            estimated_delivery: None,
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a price; negative values are clamped to zero
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount.max(0.0));
        self
    }

    /// Attach a display date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Attach an estimated delivery window
    pub fn with_estimated_delivery(mut self, window: impl Into<String>) -> Self {
        self.estimated_delivery = Some(window.into());
        self
    }

    /// Unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tracking number shown to the user
    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    /// Optional display name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Origin location
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Destination location (may be empty)
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Current status
    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    /// Optional price
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Optional display date
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Optional estimated delivery window
    pub fn estimated_delivery(&self) -> Option<&str> {
        self.estimated_delivery.as_deref()
    }

    /// Case-insensitive substring match over name, tracking number, origin
    /// and destination. An empty needle matches everything.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        let contains = |field: &str| field.to_lowercase().contains(needle);

        self.name.as_deref().is_some_and(contains)
            || contains(&self.tracking_number)
            || contains(&self.from)
            || contains(&self.to)
    }
}

// =============================================================================
// Vehicle Types & Categories
// =============================================================================

/// A kind of vehicle offered for freight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Opaque icon resource key
    pub icon: String,
}

impl VehicleType {
    /// Create a new vehicle type
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// A category of goods selectable on the calculation form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentCategory {
    /// Display name
    pub name: String,
    /// Whether the category starts out selected
    #[serde(default)]
    pub preselected: bool,
}

impl ShipmentCategory {
    /// Create an unselected category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preselected: false,
        }
    }

    /// Create a category that starts out selected
    pub fn preselected(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preselected: true,
        }
    }
}
