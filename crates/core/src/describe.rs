//! Sheet and column introspection used to pick the name column.

use serde::Serialize;
use vnuser_sheet::{Book, Sheet};

/// Maximum number of sample values collected per column.
pub const MAX_SAMPLE_VALUES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorksheetDescriptor {
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub index: usize,
    /// Header cell text, or `Column N` (1-based) when there is none.
    pub header: String,
    /// Up to five non-blank, trimmed values from the data rows.
    pub sample_values: Vec<String>,
}

/// Describe every sheet of a book, in workbook order.
#[must_use]
pub fn describe_worksheets(book: &Book) -> Vec<WorksheetDescriptor> {
    book.sheets()
        .map(|(name, sheet)| WorksheetDescriptor {
            name: name.to_string(),
            row_count: sheet.row_count(),
            column_count: sheet.col_count(),
        })
        .collect()
}

/// Describe the columns of a sheet. The column count is the width of the
/// widest row, header included.
#[must_use]
pub fn describe_columns(sheet: &Sheet, has_header: bool) -> Vec<ColumnDescriptor> {
    let data_start = usize::from(has_header);

    (0..sheet.col_count())
        .map(|index| {
            let header = if has_header {
                Some(sheet.get_or_null(0, index).as_str().trim().to_string())
                    .filter(|h| !h.is_empty())
            } else {
                None
            };

            let sample_values = sheet
                .rows()
                .skip(data_start)
                .filter_map(|row| row.get(index))
                .map(|cell| cell.as_str().trim().to_string())
                .filter(|value| !value.is_empty())
                .take(MAX_SAMPLE_VALUES)
                .collect();

            ColumnDescriptor {
                index,
                header: header.unwrap_or_else(|| format!("Column {}", index + 1)),
                sample_values,
            }
        })
        .collect()
}

/// Find a column by header text (trimmed, case-insensitive).
#[must_use]
pub fn find_column(columns: &[ColumnDescriptor], header: &str) -> Option<usize> {
    let wanted = header.trim().to_lowercase();
    columns
        .iter()
        .find(|column| column.header.trim().to_lowercase() == wanted)
        .map(|column| column.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_sheet() -> Sheet {
        Sheet::from_data(vec![
            vec!["STT", "Họ và tên", ""],
            vec!["1", "Phạm Thanh Tùng", "x"],
            vec!["2", "  ", "y"],
            vec!["3", "Nguyễn Văn An"],
        ])
    }

    #[test]
    fn test_describe_columns_with_header() {
        let columns = describe_columns(&staff_sheet(), true);

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1].header, "Họ và tên");
        assert_eq!(columns[1].sample_values, vec!["Phạm Thanh Tùng", "Nguyễn Văn An"]);
        assert_eq!(columns[2].header, "Column 3");
        assert_eq!(columns[2].sample_values, vec!["x", "y"]);
    }

    #[test]
    fn test_describe_columns_without_header() {
        let columns = describe_columns(&staff_sheet(), false);
        assert_eq!(columns[0].header, "Column 1");
        assert_eq!(columns[0].sample_values, vec!["STT", "1", "2", "3"]);
    }

    #[test]
    fn test_sample_values_capped() {
        let rows: Vec<Vec<String>> = (0..10).map(|i| vec![format!("name {i}")]).collect();
        let columns = describe_columns(&Sheet::from_data(rows), false);
        assert_eq!(columns[0].sample_values.len(), MAX_SAMPLE_VALUES);
        assert_eq!(columns[0].sample_values[4], "name 4");
    }

    #[test]
    fn test_describe_worksheets() {
        let mut book = Book::new();
        book.add_sheet("Staff", staff_sheet()).unwrap();
        book.add_sheet("Empty", Sheet::new()).unwrap();

        assert_eq!(
            describe_worksheets(&book),
            vec![
                WorksheetDescriptor { name: "Staff".to_string(), row_count: 4, column_count: 3 },
                WorksheetDescriptor { name: "Empty".to_string(), row_count: 0, column_count: 0 },
            ]
        );
    }

    #[test]
    fn test_find_column() {
        let columns = describe_columns(&staff_sheet(), true);
        assert_eq!(find_column(&columns, " họ và tên "), Some(1));
        assert_eq!(find_column(&columns, "column 3"), Some(2));
        assert_eq!(find_column(&columns, "Email"), None);
    }
}
