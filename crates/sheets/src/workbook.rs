//! A minimal in-memory spreadsheet: named sheets of loosely typed cells.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// String form of the cell; whole numbers print without a fraction so
    /// ids and DNIs stored as numbers read back unchanged.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
        }
    }

    /// The cell as an integer, if it holds a whole number or a string that
    /// parses as one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            Cell::Number(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Reads the first row as column headers.
    pub fn table(&self) -> Table<'_> {
        let (header, body) = self
            .rows
            .split_first()
            .map_or((&[][..], &[][..]), |(h, b)| (h.as_slice(), b));
        let columns = header
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_string().map(|name| (name, i)))
            .collect();
        Table { columns, body }
    }
}

/// A sheet's data rows addressed by header name.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    columns: HashMap<String, usize>,
    body: &'a [Vec<Cell>],
}

impl<'a> Table<'a> {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Data rows, skipping those with every cell blank.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.body
            .iter()
            .filter(|row| !row.iter().all(Cell::is_blank))
            .map(|row| Record {
                columns: &self.columns,
                cells: row,
            })
    }
}

/// One data row.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a HashMap<String, usize>,
    cells: &'a [Cell],
}

impl Record<'_> {
    pub fn get(&self, column: &str) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.columns
            .get(column)
            .and_then(|&i| self.cells.get(i))
            .unwrap_or(&EMPTY)
    }

    pub fn string(&self, column: &str) -> Option<String> {
        self.get(column).as_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_at(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_conversions() {
        assert_eq!(Cell::Number(12345678.0).as_string().as_deref(), Some("12345678"));
        assert_eq!(Cell::Number(1.5).as_string().as_deref(), Some("1.5"));
        assert_eq!(Cell::text("  Ana ").as_string().as_deref(), Some("Ana"));
        assert_eq!(Cell::text("   ").as_string(), None);

        assert_eq!(Cell::text(" 42 ").as_integer(), Some(42));
        assert_eq!(Cell::text("4x").as_integer(), None);
        assert_eq!(Cell::Number(7.0).as_integer(), Some(7));
        assert_eq!(Cell::Number(7.25).as_integer(), None);
        assert_eq!(Cell::Empty.as_integer(), None);
    }

    #[test]
    fn test_records_follow_header_and_skip_blank_rows() {
        let mut sheet = Sheet::new("Participantes");
        sheet.push_row(vec![Cell::text("Nombre"), Cell::text("ID")]);
        sheet.push_row(vec![Cell::text("Ana"), Cell::text("P1")]);
        sheet.push_row(vec![Cell::Empty, Cell::text(" ")]);
        sheet.push_row(vec![Cell::text("Luis")]);

        let table = sheet.table();
        assert!(table.has_column("Nombre"));
        let records: Vec<Record<'_>> = table.records().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].string("ID").as_deref(), Some("P1"));
        assert_eq!(records[1].string("Nombre").as_deref(), Some("Luis"));
        assert_eq!(records[1].get("ID"), &Cell::Empty);
        assert_eq!(records[1].get("Telefono"), &Cell::Empty);
    }
}
