//! Tree record model
//!
//! These structs represent the data model that flows between
//! the CSV layer and the map state. `RawTreeRow` mirrors the CSV
//! columns exactly; `TreeRecord` only exists for rows that carry
//! parseable coordinates.

use serde::Deserialize;

/// Raw tree row as it comes from the CSV file.
///
/// Every column is optional: campus survey exports routinely leave
/// cells blank, and those rows are dropped during validation rather
/// than failing the whole load.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTreeRow {
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<String>,
    #[serde(rename = "TreeName", default)]
    pub tree_name: Option<String>,
    #[serde(rename = "BotanicalName", default)]
    pub botanical_name: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
    #[serde(rename = "Link", default)]
    pub link: Option<String>,
}

/// A validated tree record. Parsed once from CSV, immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Common name (e.g. "Neem"). Empty string if the cell was blank.
    pub name: String,
    /// Botanical name (e.g. "Azadirachta indica"). Empty string if blank.
    pub botanical_name: String,
    /// Photo URL for the popup card, if any.
    pub image_url: Option<String>,
    /// External "Tree Tales" link, if any.
    pub link: Option<String>,
}

fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl TreeRecord {
    /// Validate a raw row into a record.
    ///
    /// Returns `None` when either coordinate is missing or not a number;
    /// such rows are skipped without reporting.
    pub fn from_row(row: RawTreeRow) -> Option<Self> {
        let latitude = parse_opt_f64(&row.latitude)?;
        let longitude = parse_opt_f64(&row.longitude)?;

        Some(TreeRecord {
            latitude,
            longitude,
            name: non_empty(row.tree_name).unwrap_or_default(),
            botanical_name: non_empty(row.botanical_name).unwrap_or_default(),
            image_url: non_empty(row.image),
            link: non_empty(row.link),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(lat: &str, lon: &str) -> RawTreeRow {
        RawTreeRow {
            latitude: Some(lat.to_string()),
            longitude: Some(lon.to_string()),
            tree_name: Some("Neem".to_string()),
            botanical_name: Some("Azadirachta indica".to_string()),
            image: Some(String::new()),
            link: None,
        }
    }

    #[test]
    fn test_valid_row_becomes_record() {
        let record = TreeRecord::from_row(row("13.0461", "80.2533")).unwrap();
        assert_eq!(record.latitude, 13.0461);
        assert_eq!(record.longitude, 80.2533);
        assert_eq!(record.name, "Neem");
        // Blank image cell normalizes to None
        assert_eq!(record.image_url, None);
    }

    #[test]
    fn test_missing_coordinate_is_dropped() {
        let mut missing_lat = row("13.0461", "80.2533");
        missing_lat.latitude = None;
        assert!(TreeRecord::from_row(missing_lat).is_none());

        let mut missing_lon = row("13.0461", "80.2533");
        missing_lon.longitude = None;
        assert!(TreeRecord::from_row(missing_lon).is_none());
    }

    #[test]
    fn test_non_numeric_coordinate_is_dropped() {
        assert!(TreeRecord::from_row(row("not-a-number", "80.2533")).is_none());
        assert!(TreeRecord::from_row(row("13.0461", "")).is_none());
    }

    #[test]
    fn test_coordinates_are_trimmed() {
        let record = TreeRecord::from_row(row(" 13.0461 ", "80.2533")).unwrap();
        assert_eq!(record.latitude, 13.0461);
    }
}
