//! Row-aligned name extraction.

use serde::Serialize;
use vnuser_sheet::CellValue;

/// Raw name text from one data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    pub original_name: String,
    /// Index among data rows (the header row is not counted).
    pub row_position: usize,
}

/// Pull the trimmed text of `column_index` out of every data row.
///
/// Exactly one record is produced per data row, including rows whose cell is
/// blank or missing, so results can be spliced back by position.
#[must_use]
pub fn extract_names(grid: &[Vec<CellValue>], column_index: usize, has_header: bool) -> Vec<NameRecord> {
    let data_rows = grid.get(usize::from(has_header)..).unwrap_or_default();

    data_rows
        .iter()
        .enumerate()
        .map(|(row_position, row)| NameRecord {
            original_name: row
                .get(column_index)
                .map(|cell| cell.as_str().trim().to_string())
                .unwrap_or_default(),
            row_position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<&str>>) -> Vec<Vec<CellValue>> {
        rows.into_iter()
            .map(|row| row.into_iter().map(CellValue::from).collect())
            .collect()
    }

    #[test]
    fn test_skips_header() {
        let grid = grid(vec![
            vec!["STT", "Họ và tên"],
            vec!["1", " Phạm Thanh Tùng "],
            vec!["2", "Nguyễn Văn An"],
        ]);
        let names = extract_names(&grid, 1, true);

        assert_eq!(names.len(), 2);
        assert_eq!(names[0].original_name, "Phạm Thanh Tùng");
        assert_eq!(names[0].row_position, 0);
        assert_eq!(names[1].original_name, "Nguyễn Văn An");
        assert_eq!(names[1].row_position, 1);
    }

    #[test]
    fn test_without_header() {
        let grid = grid(vec![vec!["Lan"], vec!["Mai"]]);
        let names: Vec<String> = extract_names(&grid, 0, false)
            .into_iter()
            .map(|r| r.original_name)
            .collect();
        assert_eq!(names, vec!["Lan", "Mai"]);
    }

    #[test]
    fn test_blank_and_missing_cells_keep_their_slot() {
        let mut grid = grid(vec![vec!["Name", "Dept"], vec!["An", "HR"], vec!["  ", "IT"], vec![]]);
        grid.push(vec![CellValue::Null, CellValue::from("Ops")]);
        grid.push(vec![CellValue::from("Mai")]);

        let names = extract_names(&grid, 0, true);
        let texts: Vec<&str> = names.iter().map(|r| r.original_name.as_str()).collect();
        assert_eq!(texts, vec!["An", "", "", "", "Mai"]);
        assert_eq!(names[4].row_position, 4);
    }

    #[test]
    fn test_non_text_cells_use_display_text() {
        let grid = vec![vec![CellValue::Int(42)], vec![CellValue::Bool(true)]];
        let names = extract_names(&grid, 0, false);
        assert_eq!(names[0].original_name, "42");
        assert_eq!(names[1].original_name, "true");
    }

    #[test]
    fn test_empty_grid() {
        assert!(extract_names(&[], 0, true).is_empty());
        assert!(extract_names(&[], 0, false).is_empty());
    }
}
