use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// A book containing multiple sheets (preserves insertion order)
#[derive(Debug, Clone, Default)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
    /// Source text started with a UTF-8 byte order mark
    utf8_bom: bool,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Book {
            sheets: IndexMap::new(),
            utf8_bom: false,
        }
    }

    /// Create a book holding exactly one sheet
    #[must_use]
    pub fn single(name: &str, mut sheet: Sheet) -> Self {
        sheet.set_name(name);
        let mut sheets = IndexMap::new();
        sheets.insert(name.to_string(), sheet);
        Book {
            sheets,
            utf8_bom: false,
        }
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Get a sheet by index (0-based)
    pub fn get_sheet_by_index(&self, index: usize) -> Result<&Sheet> {
        self.sheets
            .get_index(index)
            .map(|(_, sheet)| sheet)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: format!("index {index}"),
            })
    }

    /// `(row_count, column_count)` of a sheet
    pub fn dimensions(&self, name: &str) -> Result<(usize, usize)> {
        let sheet = self.get_sheet(name)?;
        Ok((sheet.row_count(), sheet.col_count()))
    }

    /// Add a sheet to the book
    pub fn add_sheet(&mut self, name: &str, sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }

        let mut sheet = sheet;
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// Whether delimited output should start with a UTF-8 byte order mark
    #[must_use]
    pub fn has_utf8_bom(&self) -> bool {
        self.utf8_bom
    }

    /// Mark the book as read from (or to be written as) BOM-prefixed text
    #[must_use]
    pub fn with_utf8_bom(mut self, utf8_bom: bool) -> Self {
        self.utf8_bom = utf8_bom;
        self
    }

    /// Iterate over `(name, sheet)` pairs in order
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets.iter().map(|(name, sheet)| (name.as_str(), sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_order_preserved() {
        let mut book = Book::new();
        book.add_sheet("Staff", Sheet::new()).unwrap();
        book.add_sheet("Archive", Sheet::new()).unwrap();
        book.add_sheet("Notes", Sheet::new()).unwrap();

        assert_eq!(book.sheet_names(), vec!["Staff", "Archive", "Notes"]);
        assert_eq!(book.get_sheet_by_index(1).unwrap().name(), "Archive");
    }

    #[test]
    fn test_duplicate_sheet_rejected() {
        let mut book = Book::new();
        book.add_sheet("Staff", Sheet::new()).unwrap();
        assert!(matches!(
            book.add_sheet("Staff", Sheet::new()),
            Err(SheetError::SheetAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_missing_sheet() {
        let book = Book::new();
        assert!(book.is_empty());
        assert!(matches!(
            book.get_sheet("Nope"),
            Err(SheetError::SheetNotFound { name }) if name == "Nope"
        ));
    }

    #[test]
    fn test_single_and_dimensions() {
        let sheet = Sheet::from_data(vec![vec!["Name", "Dept"], vec!["An", "HR", "x"]]);
        let book = Book::single("Output", sheet);

        assert_eq!(book.sheet_count(), 1);
        assert!(!book.has_utf8_bom());
        assert_eq!(book.get_sheet("Output").unwrap().name(), "Output");
        assert_eq!(book.dimensions("Output").unwrap(), (2, 3));
    }
}
