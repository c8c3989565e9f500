use crate::models::TourEntry;

/// Entries of one report block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGroup {
    pub year: i32,
    pub week: u32,
    pub entries: Vec<TourEntry>,
}

impl WeekGroup {
    /// "KW 52 (2024)"
    pub fn title(&self) -> String {
        format!("KW {} ({})", self.week, self.year)
    }
}

/// Stable sort by (year, week, date); same-day entries keep arrival order.
pub fn sort_entries(entries: &mut [TourEntry]) {
    entries.sort_by_key(|e| (e.year, e.week, e.date_sortable));
}

/// Sorts and splits entries into consecutive (year, week) blocks.
pub fn group_by_week(mut entries: Vec<TourEntry>) -> Vec<WeekGroup> {
    sort_entries(&mut entries);

    let mut groups: Vec<WeekGroup> = Vec::new();
    for entry in entries {
        match groups.last_mut() {
            Some(g) if (g.year, g.week) == entry.week_key() => g.entries.push(entry),
            _ => groups.push(WeekGroup {
                year: entry.year,
                week: entry.week,
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// Inverse of [`group_by_week`].
pub fn flatten(groups: Vec<WeekGroup>) -> Vec<TourEntry> {
    groups.into_iter().flat_map(|g| g.entries).collect()
}
