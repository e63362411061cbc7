//! Static sample dataset
//!
//! The literal tables the application ships with. They are built once by
//! [`crate::repository::ShipmentRepository::sample`] and never mutated.

use crate::models::{Shipment, ShipmentCategory, ShipmentStatus, VehicleType};

/// Shipments shown on the shipment history screen
pub fn shipments() -> Vec<Shipment> {
    vec![
        Shipment::new("1", "NEJ20089934122231", "Atlanta", "Chicago", ShipmentStatus::InProgress)
            .with_name("Summer linen jacket")
            .with_amount(1400.0)
            .with_date("Sep 20, 2023")
            .with_estimated_delivery("2 day -3 days"),
        Shipment::new("2", "NEJ20089934122232", "Boston", "New York", ShipmentStatus::Pending)
            .with_name("Winter boots")
            .with_amount(650.0)
            .with_date("Sep 21, 2023"),
        Shipment::new("3", "NEJ20089934122233", "San Francisco", "Los Angeles", ShipmentStatus::Completed)
            .with_name("Leather bag")
            .with_amount(850.0)
            .with_date("Sep 18, 2023"),
        Shipment::new("4", "NEJ20089934122234", "Denver", "Phoenix", ShipmentStatus::Loading)
            .with_name("Fitness equipment")
            .with_amount(1200.0)
            .with_date("Sep 22, 2023"),
        Shipment::new("5", "NEJ20089934122235", "Boston", "Seattle", ShipmentStatus::Completed)
            .with_name("Winter coat")
            .with_amount(890.0)
            .with_date("Sep 17, 2023")
            .with_estimated_delivery("1 day -2 days"),
        Shipment::new("6", "NEJ20089934122236", "Miami", "Las Vegas", ShipmentStatus::InProgress)
            .with_name("Gaming laptop")
            .with_amount(2100.0)
            .with_date("Sep 23, 2023")
            .with_estimated_delivery("3 days -4 days"),
        Shipment::new("7", "NEJ20089934122237", "New York", "Los Angeles", ShipmentStatus::Loading)
            .with_name("Camera equipment")
            .with_amount(3500.0)
            .with_date("Sep 24, 2023"),
        Shipment::new("8", "NEJ20089934122238", "Houston", "Phoenix", ShipmentStatus::Pending)
            .with_name("Office furniture")
            .with_amount(1800.0)
            .with_date("Sep 25, 2023")
            .with_estimated_delivery("4 days -5 days"),
        Shipment::new("9", "NEJ20089934122239", "Seattle", "Portland", ShipmentStatus::Completed)
            .with_name("Smartphone")
            .with_amount(950.0)
            .with_date("Sep 15, 2023"),
        Shipment::new("10", "NEJ20089934122240", "Chicago", "Detroit", ShipmentStatus::Completed)
            .with_name("Tablet")
            .with_amount(750.0)
            .with_date("Sep 16, 2023"),
        Shipment::new("11", "NEJ20089934122241", "Austin", "Dallas", ShipmentStatus::Pending)
            .with_name("Headphones")
            .with_amount(350.0)
            .with_date("Sep 26, 2023"),
        Shipment::new("12", "NEJ20089934122242", "San Diego", "Las Vegas", ShipmentStatus::InProgress)
            .with_name("Smart watch")
            .with_amount(450.0)
            .with_date("Sep 24, 2023"),
    ]
}

/// Shipments listed under the tracking screen's search
pub fn search_history() -> Vec<Shipment> {
    vec![
        Shipment::new("1", "NE4385734085790", "Paris", "Morocco", ShipmentStatus::InProgress)
            .with_name("Macbook pro M2"),
        Shipment::new("2", "NEJ20089934122231", "Barcelona", "Paris", ShipmentStatus::Pending)
            .with_name("Summer linen jacket"),
        Shipment::new("3", "NEJ3587026497865", "Colombia", "Paris", ShipmentStatus::Completed)
            .with_name("Tapered-fit jeans AW"),
        Shipment::new("4", "NEJ3587026497865", "Bogota", "Dhaka", ShipmentStatus::InProgress)
            .with_name("Slim fit jeans AW"),
        Shipment::new("5", "NEJ2348157075496", "France", "German", ShipmentStatus::Pending)
            .with_name("Office setup desk"),
    ]
}

/// Queries the user searched for recently
pub fn recent_searches() -> Vec<String> {
    [
        "NE4385734085790",
        "NEJ20089934122231",
        "NEJ3587026497865",
        "NEJ2348157075496",
        "Macbook pro M2",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Vehicle types offered on the tracking screen
pub fn vehicle_types() -> Vec<VehicleType> {
    vec![
        VehicleType::new("Cargo freight", "Reliable", "vehicle_cargo"),
        VehicleType::new("Air freight", "International", "vehicle_air"),
        VehicleType::new("Ocean freight", "International", "vehicle_ocean"),
    ]
}

/// Categories selectable on the calculation form
pub fn shipment_categories() -> Vec<ShipmentCategory> {
    vec![
        ShipmentCategory::new("Documents"),
        ShipmentCategory::new("Glass"),
        ShipmentCategory::new("Liquid"),
        ShipmentCategory::new("Food"),
        ShipmentCategory::preselected("Electronic"),
        ShipmentCategory::new("Product"),
        ShipmentCategory::new("Others"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shipment_ids_unique() {
        let data = shipments();
        let ids: HashSet<_> = data.iter().map(|s| s.id()).collect();
        assert_eq!(data.len(), 12);
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_search_history_size() {
        assert_eq!(search_history().len(), 5);
        assert_eq!(recent_searches().len(), 5);
    }

    #[test]
    fn test_tracking_numbers_may_repeat() {
        let data = search_history();
        assert_eq!(data[2].tracking_number(), data[3].tracking_number());
    }

    #[test]
    fn test_single_preselected_category() {
        let preselected: Vec<_> = shipment_categories()
            .into_iter()
            .filter(|c| c.preselected)
            .collect();
        assert_eq!(preselected.len(), 1);
        assert_eq!(preselected[0].name, "Electronic");
    }

    #[test]
    fn test_vehicle_type_order() {
        let names: Vec<_> = vehicle_types().into_iter().map(|v| v.name).collect();
        assert_eq!(names, ["Cargo freight", "Air freight", "Ocean freight"]);
    }
}
