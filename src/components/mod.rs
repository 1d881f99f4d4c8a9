//! UI Components
//!
//! Leptos components for the packing list page.

mod logo;
mod entry_form;
mod packing_list;
mod item_row;
mod stats_footer;

pub use logo::Logo;
pub use entry_form::EntryForm;
pub use packing_list::PackingList;
pub use item_row::ItemRow;
pub use stats_footer::StatsFooter;
