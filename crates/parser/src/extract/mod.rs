//! Independent field extractors over a single setup block.

pub mod allocation;
pub mod entry;
pub mod levels;
pub mod side;
pub mod symbol;

pub use allocation::{Allocation, extract_allocation};
pub use entry::{EntryExtraction, extract_entry};
pub use levels::{Levels, extract_levels};
pub use side::extract_side;
pub use symbol::extract_symbol;
