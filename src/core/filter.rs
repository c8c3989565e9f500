use crate::models::TourEntry;

/// Keeps entries whose driver name contains `needle`, ignoring case.
/// A blank needle keeps everything.
pub fn filter_by_driver(entries: Vec<TourEntry>, needle: &str) -> Vec<TourEntry> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|e| e.driver_name.to_lowercase().contains(&needle))
        .collect()
}
