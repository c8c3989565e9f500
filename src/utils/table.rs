//! Table rendering for console output.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table whose columns grow to fit their content.
    pub fn with_headers(headers: &[&str]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                width: UnicodeWidthStr::width(*h),
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.render_line(&mut out, &headers);

        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        self.render_line(&mut out, &rule);

        for row in &self.rows {
            self.render_line(&mut out, row);
        }

        out
    }

    fn render_line<S: AsRef<str>>(&self, out: &mut String, cells: &[S]) {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            // format! pads by chars, not display width
            let pad = col.width.saturating_sub(UnicodeWidthStr::width(cell));
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
