use crate::cli::output::rule_char;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub alignment: Alignment,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
            max_width: None,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Right,
            max_width: None,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Plain-text table; cells are padded to the widest entry in each column.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.chars().count(), usize::max);
                column.max_width.map_or(widest, |max| widest.min(max))
            })
            .collect()
    }

    fn render_line(&self, cells: &[&str], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = cells.get(idx).copied().unwrap_or("");
                pad(&truncate(text, *width), *width, column.alignment)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    /// Header, rule, then one line per row.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut lines = vec![
            self.render_line(&headers, &widths),
            rule_char().to_string().repeat(rule_width),
        ];
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(self.render_line(&cells, &widths));
        }
        lines.join("\n")
    }
}

pub fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut kept: String = text.chars().take(width - 1).collect();
    kept.push('…');
    kept
}

pub fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(text.chars().count());
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
    }
}
