use crate::LocationCatalog;

pub const SUGGESTION_LIMIT: usize = 5;

/// Catalog positions containing `input`, case-insensitively, capped at five.
pub fn suggest_positions(catalog: &LocationCatalog, input: &str) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .positions()
        .iter()
        .filter(|position| position.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .cloned()
        .collect()
}

/// Offers the detected city while the city input is empty or a substring of it.
pub fn suggest_cities(detected_city: Option<&str>, input: &str) -> Vec<String> {
    let Some(detected) = detected_city.filter(|city| !city.is_empty()) else {
        return Vec::new();
    };
    let needle = input.trim().to_lowercase();
    if needle.is_empty() || detected.to_lowercase().contains(&needle) {
        vec![detected.to_string()]
    } else {
        Vec::new()
    }
}
