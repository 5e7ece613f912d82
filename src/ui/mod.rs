//! UI widgets
//!
//! - map.rs: the slippy-map widget (tiles, markers, pan/zoom)
//! - popup.rs: the popup card for a selected tree

pub mod map;
pub mod popup;
