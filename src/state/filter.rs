//! Zoom-driven switcher and search filter
//!
//! Two independent rules decide what the tree layer shows:
//! - the zoom level picks WHICH representation is drawn (dots when
//!   zoomed out, icons when zoomed in),
//! - the search query picks WHICH entries are members of the visible
//!   set. An empty query means the full set.

use crate::state::entry::{Marker, TreeEntry};

/// Which representation the tree layer currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Dot,
    Icon,
}

/// Transition rule: at or below the threshold every entry renders as a
/// dot; above it as its category icon.
pub fn representation_for_zoom(zoom: f64, dot_threshold: f64) -> Representation {
    if zoom <= dot_threshold {
        Representation::Dot
    } else {
        Representation::Icon
    }
}

/// The marker of `entry` matching the active representation.
pub fn marker_for(entry: &TreeEntry, representation: Representation) -> &Marker {
    match representation {
        Representation::Dot => &entry.dot,
        Representation::Icon => &entry.marker,
    }
}

/// Recompute visible layer membership for a search query.
///
/// Matches the lowercased query as a substring of the cached lowercase
/// name or botanical name. A blank query restores the full set; that is
/// also what a collapsed search control sends.
pub fn visible_entries(entries: &[TreeEntry], query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return (0..entries.len()).collect();
    }

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            entry.lowercase_name.contains(&query) || entry.lowercase_botanical.contains(&query)
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::TreeRecord;
    use crate::state::entry::{build_entries, MarkerKind};

    fn entries() -> Vec<TreeEntry> {
        let records = vec![
            TreeRecord {
                latitude: 13.0461,
                longitude: 80.2533,
                name: "Neem".to_string(),
                botanical_name: "Azadirachta indica".to_string(),
                image_url: None,
                link: None,
            },
            TreeRecord {
                latitude: 13.0472,
                longitude: 80.2541,
                name: "Gulmohar".to_string(),
                botanical_name: "Delonix regia".to_string(),
                image_url: None,
                link: None,
            },
            TreeRecord {
                latitude: 13.0450,
                longitude: 80.2520,
                name: "Coconut".to_string(),
                botanical_name: "Cocos nucifera".to_string(),
                image_url: None,
                link: None,
            },
        ];
        build_entries(&records)
    }

    #[test]
    fn test_dots_at_threshold_icons_above() {
        assert_eq!(representation_for_zoom(18.0, 18.0), Representation::Dot);
        assert_eq!(representation_for_zoom(17.5, 18.0), Representation::Dot);
        assert_eq!(representation_for_zoom(18.1, 18.0), Representation::Icon);
        assert_eq!(representation_for_zoom(23.0, 18.0), Representation::Icon);
    }

    #[test]
    fn test_marker_for_picks_matching_kind() {
        let entries = entries();
        assert_eq!(
            marker_for(&entries[0], Representation::Dot).kind,
            MarkerKind::Dot
        );
        assert_eq!(
            marker_for(&entries[0], Representation::Icon).kind,
            MarkerKind::Icon
        );
    }

    #[test]
    fn test_empty_query_restores_full_set() {
        let entries = entries();
        assert_eq!(visible_entries(&entries, ""), vec![0, 1, 2]);
        assert_eq!(visible_entries(&entries, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn test_query_filters_by_name() {
        let entries = entries();
        assert_eq!(visible_entries(&entries, "neem"), vec![0]);
        assert_eq!(visible_entries(&entries, "GULMOHAR"), vec![1]);
    }

    #[test]
    fn test_query_matches_botanical_name() {
        let entries = entries();
        assert_eq!(visible_entries(&entries, "cocos"), vec![2]);
        assert_eq!(visible_entries(&entries, "regia"), vec![1]);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let entries = entries();
        assert!(visible_entries(&entries, "banyan").is_empty());
    }
}
