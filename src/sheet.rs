// 📄 Sheet Access - Raw spreadsheet grids with no implicit header row
// Thin wrapper over calamine so layout parsers stay pure functions over cells

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use calamine::Data;

// ============================================================================
// WORKBOOK
// ============================================================================

/// An open workbook. Sheets are addressed by name (the handbook uses the
/// table number as the sheet name, one of them with a trailing space).
pub struct Workbook {
    inner: Sheets<BufReader<File>>,
    path: String,
}

impl Workbook {
    /// Open a workbook, auto-detecting xls/xlsx/xlsb/ods
    pub fn open(path: &Path) -> Result<Self> {
        let inner = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
        Ok(Workbook {
            inner,
            path: path.display().to_string(),
        })
    }

    /// Materialize one sheet as an in-memory grid
    pub fn sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self
            .inner
            .worksheet_range(name)
            .with_context(|| format!("Sheet '{}' not found in {}", name, self.path))?;
        Ok(Sheet::from_range(&range))
    }
}

// ============================================================================
// SHEET GRID
// ============================================================================

/// Row-major cell grid anchored at A1, so parsers can use the absolute row
/// and column positions the source layouts are described in.
#[derive(Debug, Clone)]
pub struct Sheet {
    rows: Vec<Vec<Data>>,
}

impl Sheet {
    /// Build a sheet from an owned grid (used by tests for synthetic layouts)
    pub fn from_rows(rows: Vec<Vec<Data>>) -> Self {
        Sheet { rows }
    }

    /// Build a sheet from a calamine range, re-anchoring at A1.
    /// calamine trims leading empty rows/columns; the source layouts are
    /// positional, so the offset has to be restored.
    pub fn from_range(range: &Range<Data>) -> Self {
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let mut rows: Vec<Vec<Data>> = vec![Vec::new(); start_row as usize];
        for source_row in range.rows() {
            let mut row = vec![Data::Empty; start_col as usize];
            row.extend(source_row.iter().cloned());
            rows.push(row);
        }
        Sheet { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Data> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Trimmed textual rendering of a cell; None for empty/blank cells.
    /// Numeric cells render through Display, so a year stored as 2024.0
    /// comes back as "2024".
    pub fn text(&self, row: usize, col: usize) -> Option<String> {
        let cell = self.cell(row, col)?;
        let s = match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => return None,
            other => other.to_string(),
        };
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.text(row, col).is_none()
    }

    /// True only for cells holding an actual numeric value (not a numeric
    /// string) - the serial-number gate in the channel layouts needs this.
    pub fn is_numeric_cell(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Data::Float(_)) | Some(Data::Int(_)))
    }

    /// All cell texts of a row joined with spaces, for header sniffing
    pub fn row_text(&self, row: usize) -> String {
        let Some(cells) = self.rows.get(row) else {
            return String::new();
        };
        cells
            .iter()
            .filter_map(|c| match c {
                Data::String(s) => Some(s.trim().to_string()),
                Data::Empty => None,
                other => Some(other.to_string()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// TESTS
// ============================================================================
