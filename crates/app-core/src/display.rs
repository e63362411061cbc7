//! Display fallbacks
//!
//! Resolution of optional shipment fields into the strings the renderer
//! shows, so that defaults live in one place instead of in every view.

use crate::config::DisplayConfig;
use crate::models::Shipment;

/// Name of the shipment, or the configured fallback when it has none
pub fn display_name<'a>(shipment: &'a Shipment, config: &'a DisplayConfig) -> &'a str {
    shipment.name().unwrap_or(&config.arriving_fallback)
}

/// Two-line delivery blurb shown on history cards
pub fn delivery_details(shipment: &Shipment) -> String {
    if shipment.to().is_empty() {
        format!(
            "Your delivery, #{}\nfrom {}",
            shipment.tracking_number(),
            shipment.from()
        )
    } else {
        format!(
            "Your delivery, #{}\nfrom {}, is arriving today!",
            shipment.tracking_number(),
            shipment.from()
        )
    }
}

/// One-line route summary used in search results
pub fn route_summary(shipment: &Shipment) -> String {
    format!(
        "#{} • {} → {}",
        shipment.tracking_number(),
        shipment.from(),
        shipment.to()
    )
}

/// Format a monetary value as whole units, e.g. `$1400 USD`
///
/// The fractional part is truncated, not rounded.
pub fn format_amount(amount: f64, config: &DisplayConfig) -> String {
    format!("${} {}", amount.trunc() as i64, config.currency)
}

/// Formatted price of a shipment, if it has one
pub fn amount_label(shipment: &Shipment, config: &DisplayConfig) -> Option<String> {
    shipment.amount().map(|a| format_amount(a, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShipmentStatus;

    fn unnamed(to: &str) -> Shipment {
        Shipment::new("x", "NEJ42", "Austin", to, ShipmentStatus::Pending)
    }

    #[test]
    fn test_display_name_fallback() {
        let config = DisplayConfig::default();
        assert_eq!(display_name(&unnamed("Dallas"), &config), "Arriving today!");

        let named = unnamed("Dallas").with_name("Headphones");
        assert_eq!(display_name(&named, &config), "Headphones");
    }

    #[test]
    fn test_display_name_custom_fallback() {
        let config = DisplayConfig {
            arriving_fallback: "Unnamed parcel".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(display_name(&unnamed("Dallas"), &config), "Unnamed parcel");
    }

    #[test]
    fn test_delivery_details() {
        assert_eq!(
            delivery_details(&unnamed("Dallas")),
            "Your delivery, #NEJ42\nfrom Austin, is arriving today!"
        );
        assert_eq!(
            delivery_details(&unnamed("")),
            "Your delivery, #NEJ42\nfrom Austin"
        );
    }

    #[test]
    fn test_route_summary() {
        assert_eq!(route_summary(&unnamed("Dallas")), "#NEJ42 • Austin → Dallas");
        assert_eq!(route_summary(&unnamed("")), "#NEJ42 • Austin → ");
    }

    #[test]
    fn test_format_amount_truncates() {
        let config = DisplayConfig::default();
        assert_eq!(format_amount(1400.0, &config), "$1400 USD");
        assert_eq!(format_amount(1460.99, &config), "$1460 USD");
        assert_eq!(format_amount(0.0, &config), "$0 USD");
    }

    #[test]
    fn test_amount_label() {
        let config = DisplayConfig::default();
        assert_eq!(amount_label(&unnamed("Dallas"), &config), None);
        assert_eq!(
            amount_label(&unnamed("Dallas").with_amount(350.0), &config),
            Some("$350 USD".to_string())
        );
    }
}
