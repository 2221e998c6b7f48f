use crate::{Error, Result};
use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use std::io::Cursor;
use tracing::debug;

/// Rows returned to the caller for display after an upload.
pub const DISPLAY_ROWS: usize = 200;
/// Rows serialized into a question prompt.
pub const PROMPT_ROWS: usize = 100;

/// A CSV or spreadsheet file loaded fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Picks the reader from the file name: `.xlsx` goes through the
    /// spreadsheet reader, anything else is parsed as CSV.
    pub fn from_bytes(filename: &str, bytes: &[u8]) -> Result<Self> {
        let table = if filename.to_lowercase().ends_with(".xlsx") {
            Self::from_xlsx(bytes)?
        } else {
            Self::from_csv(bytes)?
        };

        if table.headers.is_empty() {
            return Err(Error::input(format!("{filename} contains no columns")));
        }

        debug!(
            "Loaded {} with {} columns and {} rows",
            filename,
            table.headers.len(),
            table.rows.len()
        );
        Ok(table)
    }

    fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    fn from_xlsx(bytes: &[u8]) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::input("workbook has no worksheets"))??;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(Data::to_string).collect::<Vec<_>>());
        let headers = rows.next().unwrap_or_default();

        Ok(Self {
            headers,
            rows: rows.collect(),
        })
    }

    pub fn head(&self, limit: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(limit)]
    }

    /// Text rendering of the first `limit` rows with a row index column,
    /// right-aligned per column.
    pub fn preview(&self, limit: usize) -> String {
        let rows = self.head(limit);
        let columns = self.headers.len();

        let index_width = rows.len().saturating_sub(1).to_string().len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(columns) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        let mut header = " ".repeat(index_width);
        for (h, &w) in self.headers.iter().zip(&widths) {
            header.push_str(&format!("  {h:>w$}"));
        }
        lines.push(header);

        for (index, row) in rows.iter().enumerate() {
            let mut line = format!("{index:>index_width$}");
            for (i, &w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&format!("  {cell:>w$}"));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}

pub fn question_prompt(table: &Table, question: &str) -> String {
    format!(
        "CSV preview:\n{}\n\nQuestion: {}",
        table.preview(PROMPT_ROWS),
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEDGER: &str = "date,vendor,total\n2024-01-02,Acme,12.50\n2024-01-03,Globex,7\n";

    #[test]
    fn test_csv_is_loaded() {
        let table = Table::from_bytes("ledger.csv", LEDGER.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["date", "vendor", "total"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["2024-01-03", "Globex", "7"]);
    }

    #[test]
    fn test_preview_is_aligned() {
        let table = Table::from_bytes("ledger.csv", LEDGER.as_bytes()).unwrap();
        assert_eq!(
            table.preview(10),
            "         date  vendor  total\n0  2024-01-02    Acme  12.50\n1  2024-01-03  Globex      7"
        );
    }

    #[test]
    fn test_preview_respects_limit() {
        let mut csv = String::from("n\n");
        for i in 0..150 {
            csv.push_str(&format!("{i}\n"));
        }
        let table = Table::from_bytes("numbers.csv", csv.as_bytes()).unwrap();

        assert_eq!(table.head(PROMPT_ROWS).len(), PROMPT_ROWS);
        assert_eq!(table.preview(PROMPT_ROWS).lines().count(), PROMPT_ROWS + 1);
        assert_eq!(table.head(DISPLAY_ROWS).len(), 150);
    }

    #[test]
    fn test_short_rows_are_padded_in_preview() {
        let table = Table::from_bytes("gaps.csv", b"a,b\n1\n").unwrap();
        assert_eq!(table.preview(5), "   a  b\n0  1   ");
    }

    #[test]
    fn test_empty_csv_is_input_error() {
        let err = Table::from_bytes("empty.csv", b"").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_garbage_xlsx_is_input_error() {
        let err = Table::from_bytes("book.XLSX", b"not a zip archive").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_question_prompt() {
        let table = Table::from_bytes("ledger.csv", LEDGER.as_bytes()).unwrap();
        let prompt = question_prompt(&table, "Which vendor cost most?");
        assert!(prompt.starts_with("CSV preview:\n"));
        assert!(prompt.ends_with("\n\nQuestion: Which vendor cost most?"));
    }
}
