//! Map state module
//!
//! This module handles everything between the parsed dataset and the
//! map widget:
//! - Category classification from tree names (category.rs)
//! - Entry construction: marker/dot pairs with cached search fields (entry.rs)
//! - The zoom-driven switcher and the search filter (filter.rs)

pub mod category;
pub mod entry;
pub mod filter;
