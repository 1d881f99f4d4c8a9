//! Packing Statistics
//!
//! Aggregate counts shown in the page footer.

use crate::models::Item;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackingStats {
    pub total: usize,
    pub packed: usize,
    /// Packed share, rounded half up
    pub percentage: usize,
}

impl PackingStats {
    pub fn of(items: &[Item]) -> Self {
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        Self {
            total,
            packed,
            percentage: rounded_percentage(packed, total),
        }
    }

    pub fn message(&self) -> String {
        if self.total == 0 {
            return "Your packing list is empty.".to_string();
        }
        format!(
            "You have packed {} out of {} items ({}%).",
            self.packed, self.total, self.percentage
        )
    }
}

fn rounded_percentage(packed: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    // round(100 * packed / total) in integers
    (200 * packed + total) / (2 * total)
}
