//! Frontend Models
//!
//! The packing list entry and its creation timestamp rendering.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

/// Item identity: Unix milliseconds at creation time
pub type ItemId = i64;

/// Color for items nobody has recolored yet
pub const DEFAULT_COLOR: &str = "#ffffff";

/// en-US locale string layout, e.g. "3/7/2024, 9:05:12 AM"
const CREATED_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A single packing list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Unique identifier, doubles as the creation timestamp
    pub id: ItemId,
    /// Trimmed, never empty
    pub description: String,
    /// Always >= 1
    pub quantity: i64,
    pub packed: bool,
    /// CSS color value (e.g., "#FF5733")
    pub color: String,
}

impl Item {
    /// Create an unpacked item
    pub fn new(
        id: ItemId,
        description: impl Into<String>,
        quantity: i64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
            color: color.into(),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.id)
    }

    /// Creation time in the browser's local zone
    pub fn created_label(&self) -> String {
        self.created_label_in(&Local)
    }

    pub fn created_label_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.created_at()
            .map(|at| at.with_timezone(tz).format(CREATED_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Quantity as shown next to the description
    pub fn quantity_label(&self) -> String {
        format!("(x{})", self.quantity)
    }
}
