use crate::book::Book;
use crate::csv::CsvOptions;
use crate::error::{Result, SheetError};
use std::fmt;
use std::path::Path;

/// Sheet name given to the single sheet of a delimited-text document
pub const DELIMITED_SHEET_NAME: &str = "Sheet1";

/// Container formats the document adapter can read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Xlsx,
    /// Legacy Excel 97-2003 workbook; read only, written back as XLSX
    Xls,
    Csv,
    Tsv,
}

impl DocumentFormat {
    /// Detect the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" => Ok(DocumentFormat::Xlsx),
            "xls" => Ok(DocumentFormat::Xls),
            "csv" => Ok(DocumentFormat::Csv),
            "tsv" => Ok(DocumentFormat::Tsv),
            _ => Err(SheetError::UnsupportedFormat(
                path.as_ref().display().to_string(),
            )),
        }
    }

    /// Canonical file extension (without the dot)
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Xlsx => "xlsx",
            DocumentFormat::Xls => "xls",
            DocumentFormat::Csv => "csv",
            DocumentFormat::Tsv => "tsv",
        }
    }

    /// Format that `serialize` produces for this input format
    #[must_use]
    pub fn output_format(self) -> DocumentFormat {
        match self {
            DocumentFormat::Xls => DocumentFormat::Xlsx,
            other => other,
        }
    }

    fn csv_options(self) -> CsvOptions {
        match self {
            DocumentFormat::Tsv => CsvOptions::tsv(),
            _ => CsvOptions::default(),
        }
    }

    /// Parse raw document bytes into a book. A document without sheets is an error.
    pub fn parse(self, bytes: &[u8]) -> Result<Book> {
        let book = match self {
            DocumentFormat::Xlsx => Book::from_xlsx_bytes(bytes)?,
            DocumentFormat::Xls => Book::from_xls_bytes(bytes)?,
            DocumentFormat::Csv | DocumentFormat::Tsv => {
                Book::from_csv_bytes(bytes, DELIMITED_SHEET_NAME, &self.csv_options())?
            }
        };

        if book.is_empty() {
            return Err(SheetError::NoSheets);
        }

        Ok(book)
    }

    /// Serialize a book into this format's [`output_format`](Self::output_format)
    pub fn serialize(self, book: &Book) -> Result<Vec<u8>> {
        match self {
            DocumentFormat::Xlsx | DocumentFormat::Xls => book.to_xlsx_bytes(),
            DocumentFormat::Csv | DocumentFormat::Tsv => book.to_csv_bytes(&self.csv_options()),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
