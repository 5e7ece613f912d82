//! Tree entries
//!
//! For every valid record the factory builds two visual representations
//! sharing the same popup content: a categorized icon marker and a
//! lightweight dot. Lowercase search fields and the projected world
//! position are cached here once so search and drawing never touch the
//! original strings or redo the projection.

use cgmath::Vector2;

use crate::data::record::TreeRecord;
use crate::state::category::{self, Category};
use crate::ui::map::{lat_to_y, lon_to_x};

/// How a marker is drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Category icon, anchored bottom-center like a pin
    Icon,
    /// Small green dot, centered
    Dot,
}

/// One visual representation of a tree, placed on the map.
#[derive(Debug, Clone)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    /// Web Mercator position at zoom 0, in tile pixels
    pub world: Vector2<f64>,
    pub kind: MarkerKind,
    pub category: Category,
}

/// Content shown in the popup card; both representations of an entry
/// are bound to the same content.
#[derive(Debug, Clone)]
pub struct PopupContent {
    pub name: String,
    pub botanical_name: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

/// A tree record paired with its two visual representations.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    pub marker: Marker,
    pub dot: Marker,
    pub popup: PopupContent,
    pub lowercase_name: String,
    pub lowercase_botanical: String,
}

fn make_marker(record: &TreeRecord, kind: MarkerKind, category: Category) -> Marker {
    Marker {
        latitude: record.latitude,
        longitude: record.longitude,
        world: Vector2::new(
            lon_to_x(record.longitude, 0.0),
            lat_to_y(record.latitude, 0.0),
        ),
        kind,
        category,
    }
}

/// Build the entry for one valid record.
pub fn make_entry(record: &TreeRecord) -> TreeEntry {
    let category = category::classify(&record.name);

    TreeEntry {
        marker: make_marker(record, MarkerKind::Icon, category),
        dot: make_marker(record, MarkerKind::Dot, category),
        popup: PopupContent {
            name: record.name.clone(),
            botanical_name: record.botanical_name.clone(),
            image_url: record.image_url.clone(),
            link: record.link.clone(),
        },
        lowercase_name: record.name.to_lowercase(),
        lowercase_botanical: record.botanical_name.to_lowercase(),
    }
}

/// Build entries for all records, preserving order.
pub fn build_entries(records: &[TreeRecord]) -> Vec<TreeEntry> {
    records.iter().map(make_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TreeRecord {
        TreeRecord {
            latitude: 13.0461,
            longitude: 80.2533,
            name: "Coconut Palm".to_string(),
            botanical_name: "Cocos Nucifera".to_string(),
            image_url: Some("coconut.jpg".to_string()),
            link: None,
        }
    }

    #[test]
    fn test_entry_has_both_representations() {
        let entry = make_entry(&record());
        assert_eq!(entry.marker.kind, MarkerKind::Icon);
        assert_eq!(entry.dot.kind, MarkerKind::Dot);
        // Same place, same category, same popup content
        assert_eq!(entry.marker.latitude, entry.dot.latitude);
        assert_eq!(entry.marker.longitude, entry.dot.longitude);
        assert_eq!(entry.marker.category, Category::Coconut);
        assert_eq!(entry.dot.category, Category::Coconut);
        assert_eq!(entry.popup.name, "Coconut Palm");
    }

    #[test]
    fn test_search_fields_are_lowercased() {
        let entry = make_entry(&record());
        assert_eq!(entry.lowercase_name, "coconut palm");
        assert_eq!(entry.lowercase_botanical, "cocos nucifera");
    }

    #[test]
    fn test_world_position_matches_projection() {
        let entry = make_entry(&record());
        assert_eq!(entry.marker.world.x, lon_to_x(80.2533, 0.0));
        assert_eq!(entry.marker.world.y, lat_to_y(13.0461, 0.0));
        assert_eq!(entry.marker.world, entry.dot.world);
    }

    #[test]
    fn test_build_entries_preserves_order() {
        let mut second = record();
        second.name = "Neem".to_string();
        let entries = build_entries(&[record(), second]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].popup.name, "Neem");
    }
}
