//! Reusable UI Components
//!
//! Line-producing building blocks shared by the report sections.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab selector with arrow marker
//! - `CopyLabel` - "Copy" / "Copied!" label on code blocks
//! - `CodeBlock` - Boxed code view with language tag and copy label
//! - `StatCard` - Boxed statistic with title, value and notes
//! - `AddressTable` - Ranked address table

mod address_table;
mod code_block;
mod copy_label;
mod stat_card;
mod tab_selector;

pub use address_table::render_address_table;
pub use code_block::render_code_block;
pub use copy_label::copy_label;
pub use stat_card::{render_stat_card, render_stat_grid};
pub use tab_selector::{render_tab_selector, TabItem};
