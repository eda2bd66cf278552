//! Site metadata and the device roster.
//!
//! This module contains:
//! - [`SiteInfo`] - A site's identity and its device roster
//! - [`Device`] - One roster entry, pairing a device ID with a display name

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Site Info
// ============================================================================

/// Read-only description of one site and its device roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// The ID of the site.
    pub id: String,
    /// The display name of the site.
    pub name: String,
    /// The site's devices, in roster order.
    pub devices: Vec<Device>,
}

/// One entry in a site's device roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// The device ID.
    pub id: String,
    /// The display name of the device.
    pub name: String,
}

impl SiteInfo {
    /// Builds a device-ID to display-name lookup from the roster.
    ///
    /// The map is built fresh on each call and inserts in roster order, so
    /// a duplicated device ID resolves to the last name listed for it.
    pub fn device_names(&self) -> HashMap<String, String> {
        self.devices
            .iter()
            .map(|device| (device.id.clone(), device.name.clone()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, name: &str) -> Device {
        Device {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_device_names_maps_ids_to_display_names() {
        let site = SiteInfo {
            id: "pear-tree".to_string(),
            name: "Pear Tree".to_string(),
            devices: vec![device("d1", "Partridge"), device("d2", "Turtle Dove")],
        };

        let names = site.device_names();
        assert_eq!(names.len(), 2);
        assert_eq!(names["d1"], "Partridge");
        assert_eq!(names["d2"], "Turtle Dove");
    }

    #[test]
    fn test_device_names_last_entry_wins_for_duplicate_ids() {
        let site = SiteInfo {
            id: "pear-tree".to_string(),
            name: "Pear Tree".to_string(),
            devices: vec![device("d1", "Old Name"), device("d1", "New Name")],
        };

        let names = site.device_names();
        assert_eq!(names.len(), 1);
        assert_eq!(names["d1"], "New Name");
    }

    #[test]
    fn test_device_names_is_empty_for_empty_roster() {
        let site = SiteInfo {
            id: "pear-tree".to_string(),
            name: "Pear Tree".to_string(),
            devices: vec![],
        };

        assert!(site.device_names().is_empty());
    }

    #[test]
    fn test_site_info_parses_documented_wire_format() {
        let json = r#"{
            "id": "pear-tree",
            "name": "Pear Tree",
            "devices": [
                {"id": "44c02564-a229-4f51-8ded-cc7bcb202566", "name": "Partridge"}
            ]
        }"#;

        let site: SiteInfo = serde_json::from_str(json).unwrap();
        assert_eq!(site.name, "Pear Tree");
        assert_eq!(site.devices.len(), 1);
        assert_eq!(site.devices[0].name, "Partridge");
    }
}
