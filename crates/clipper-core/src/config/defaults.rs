//! Default value functions used by serde for config deserialization.

use std::collections::BTreeMap;

use super::DestinationConfig;
use crate::limits::FragmentMode;

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_destination_name() -> String {
    "irc".to_string()
}

pub fn default_max_message_length() -> usize {
    4096
}

pub fn default_max_parts() -> usize {
    1
}

/// Profiles available when the config file does not define any.
pub fn default_destinations() -> BTreeMap<String, DestinationConfig> {
    let mut destinations = BTreeMap::new();
    destinations.insert(
        "irc".to_string(),
        DestinationConfig {
            mode: FragmentMode::Lines,
            max_line_length: 400,
            ..Default::default()
        },
    );
    destinations.insert(
        "telegram".to_string(),
        DestinationConfig {
            mode: FragmentMode::Segment,
            max_message_length: 4096,
            ..Default::default()
        },
    );
    destinations.insert(
        "discord".to_string(),
        DestinationConfig {
            mode: FragmentMode::Segment,
            max_message_length: 1950,
            max_parts: 3,
            ..Default::default()
        },
    );
    destinations
}
