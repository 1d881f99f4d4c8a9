//! Entry Form State
//!
//! Transient input held by the entry form and the rules for turning it
//! into a new item.

use thiserror::Error;

use crate::models::{Item, ItemId};

/// Reasons a submission is refused. The message is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid description.")]
    EmptyDescription,
    #[error("Please enter a positive quantity.")]
    NonPositiveQuantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub description: String,
    pub quantity: i64,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
        }
    }
}

impl EntryDraft {
    /// Store the raw text of the quantity input
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.quantity = coerce_quantity(raw);
    }

    /// Build the new item and reset the draft.
    ///
    /// `next_id` is only called once validation has passed. On error the
    /// draft is left exactly as it was.
    pub fn submit(
        &mut self,
        next_id: impl FnOnce() -> ItemId,
        color: &str,
    ) -> Result<Item, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::EmptyDescription);
        }
        if self.quantity <= 0 {
            return Err(FormError::NonPositiveQuantity);
        }

        let item = Item::new(next_id(), description, self.quantity, color);
        *self = Self::default();
        Ok(item)
    }
}

/// Number coercion for the quantity input: blank or garbage is 0,
/// fractions truncate toward zero.
fn coerce_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}
