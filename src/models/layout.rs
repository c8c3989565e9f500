use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Highest column index an XLSX worksheet can address.
const MAX_COLUMN: usize = 16_383;

/// Column positions of a tour sheet, 0-based (column A = 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ColumnLayout {
    pub first_name: (usize, usize),
    pub second_name: (usize, usize),
    pub date: usize,
    pub time: usize,
    pub vehicle: usize,
    pub tour: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            first_name: (3, 4),
            second_name: (6, 7),
            date: 14,
            time: 8,
            vehicle: 11,
            tour: 15,
        }
    }
}

impl ColumnLayout {
    /// Name pairs in emission order.
    pub fn name_pairs(&self) -> [(usize, usize); 2] {
        [self.first_name, self.second_name]
    }

    /// Checks the layout once, before any file is read.
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("first_name.0", self.first_name.0),
            ("first_name.1", self.first_name.1),
            ("second_name.0", self.second_name.0),
            ("second_name.1", self.second_name.1),
            ("date", self.date),
            ("time", self.time),
            ("vehicle", self.vehicle),
            ("tour", self.tour),
        ];

        if let Some((name, col)) = fields.iter().find(|(_, col)| *col > MAX_COLUMN) {
            return Err(AppError::InvalidLayout(format!(
                "column {col} for '{name}' exceeds the worksheet limit of {MAX_COLUMN}"
            )));
        }

        // name columns and the date column must not overlap
        let keyed = &fields[..5];
        for (i, (a_name, a_col)) in keyed.iter().enumerate() {
            for (b_name, b_col) in &keyed[i + 1..] {
                if a_col == b_col {
                    return Err(AppError::InvalidLayout(format!(
                        "'{a_name}' and '{b_name}' both use column {a_col}"
                    )));
                }
            }
        }

        Ok(())
    }
}
