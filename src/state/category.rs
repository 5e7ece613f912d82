//! Tree category detection
//!
//! Maps a free-text tree name to one of a fixed small set of categories
//! via ordered substring matching. The order matters: "Coconut Palm"
//! must classify as coconut, not palm.

use iced::Color;

/// Marker category derived from a tree's common name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Coconut,
    Palm,
    Neem,
    Fruit,
    Avenue,
    Flower,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Coconut,
        Category::Palm,
        Category::Neem,
        Category::Fruit,
        Category::Avenue,
        Category::Flower,
        Category::Other,
    ];

    /// Stable lowercase tag, also used as the icon file stem.
    pub fn label(self) -> &'static str {
        match self {
            Category::Coconut => "coconut",
            Category::Palm => "palm",
            Category::Neem => "neem",
            Category::Fruit => "fruit",
            Category::Avenue => "avenue",
            Category::Flower => "flower",
            Category::Other => "other",
        }
    }

    /// Fill color for the fallback icon marker shape.
    pub fn color(self) -> Color {
        match self {
            Category::Coconut => Color::from_rgb(0.55, 0.38, 0.15),
            Category::Palm => Color::from_rgb(0.55, 0.60, 0.20),
            Category::Neem => Color::from_rgb(0.10, 0.45, 0.20),
            Category::Fruit => Color::from_rgb(0.90, 0.55, 0.10),
            Category::Avenue => Color::from_rgb(0.15, 0.55, 0.55),
            Category::Flower => Color::from_rgb(0.80, 0.20, 0.45),
            Category::Other => Color::from_rgb(0.30, 0.65, 0.30),
        }
    }
}

/// Classify a tree name into a category.
///
/// Pure function: lowercases the input, tests ordered substring
/// predicates and returns the first match, falling back to `Other`.
pub fn classify(name: &str) -> Category {
    let name = name.to_lowercase();
    let has = |needle: &str| name.contains(needle);

    if has("coconut") || has("thennai") {
        return Category::Coconut;
    }
    if has("palm") {
        return Category::Palm;
    }
    if has("neem") {
        return Category::Neem;
    }
    if has("mango") || has("jack") || has("guava") || has("tamarind") || has("cashew") {
        return Category::Fruit;
    }
    if has("ashoka") || has("polyalthia") || has("christmas") {
        return Category::Avenue;
    }
    if has("gulmohar") || has("jacaranda") || has("peepal") {
        return Category::Flower;
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neem_names_classify_as_neem() {
        assert_eq!(classify("Neem"), Category::Neem);
        assert_eq!(classify("neem tree"), Category::Neem);
        assert_eq!(classify("Sweet NEEM"), Category::Neem);
    }

    #[test]
    fn test_ordered_precedence() {
        // Coconut is tested before palm, so "Coconut Palm" is a coconut
        assert_eq!(classify("Coconut Palm"), Category::Coconut);
        assert_eq!(classify("Thennai"), Category::Coconut);
        assert_eq!(classify("Fan Palm"), Category::Palm);
    }

    #[test]
    fn test_fruit_and_avenue_and_flower() {
        assert_eq!(classify("Mango"), Category::Fruit);
        assert_eq!(classify("Jackfruit"), Category::Fruit);
        assert_eq!(classify("Ashoka"), Category::Avenue);
        assert_eq!(classify("False Ashoka (Polyalthia)"), Category::Avenue);
        assert_eq!(classify("Gulmohar"), Category::Flower);
        assert_eq!(classify("Peepal"), Category::Flower);
    }

    #[test]
    fn test_unknown_and_empty_fall_back_to_other() {
        assert_eq!(classify("Banyan"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }
}
