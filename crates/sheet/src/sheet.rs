use crate::cell::CellValue;

/// A sheet representing a 2D grid of cells (row-major storage).
///
/// Rows may have different lengths; cells past the end of a short row are
/// treated as empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (width of the widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Get a cell value, treating cells past the end of a short row as null
    #[must_use]
    pub fn get_or_null(&self, row: usize, col: usize) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.data.get(row).and_then(|r| r.get(col)).unwrap_or(&NULL)
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.data.iter()
    }

    /// Get the underlying data
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get mutable access to the underlying data
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_count_uses_widest_row() {
        let sheet = Sheet::from_data(vec![vec!["a"], vec!["b", "c", "d"], vec![]]);
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.col_count(), 3);
    }

    #[test]
    fn test_get_or_null_past_row_end() {
        let sheet = Sheet::from_data(vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(sheet.get_or_null(0, 1), &CellValue::from("b"));
        assert_eq!(sheet.get_or_null(1, 1), &CellValue::Null);
        assert_eq!(sheet.get_or_null(9, 0), &CellValue::Null);
    }

    #[test]
    fn test_rows_in_order() {
        let sheet = Sheet::from_data(vec![vec![1, 2], vec![3]]);
        let widths: Vec<usize> = sheet.rows().map(Vec::len).collect();
        assert_eq!(widths, vec![2, 1]);
        assert_eq!(sheet.data()[0], vec![CellValue::Int(1), CellValue::Int(2)]);
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::new();
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.col_count(), 0);
        assert_eq!(sheet.name(), "Sheet1");
    }
}
