//! Sheet/Book grid model for vnuser
//!
//! Provides the tabular document adapter used by the username pipeline: an
//! in-memory grid of cells, ordered books of named sheets, and XLSX / CSV codecs
//! that read and write whole documents as byte buffers.
//!
//! # Examples
//!
//! ```
//! use vnuser_sheet::{Book, DocumentFormat};
//!
//! let book = DocumentFormat::Csv.parse(b"Name,Dept\nAn,HR\n").unwrap();
//! assert_eq!(book.sheet_names(), vec!["Sheet1"]);
//! assert_eq!(book.dimensions("Sheet1").unwrap(), (2, 2));
//!
//! let bytes = DocumentFormat::Csv.serialize(&book).unwrap();
//! assert_eq!(bytes, b"Name,Dept\nAn,HR\n");
//! ```

mod book;
mod cell;
mod csv;
mod error;
mod format;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export CSV options.
pub use csv::CsvOptions;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export document format detection and codec dispatch.
pub use format::{DocumentFormat, DELIMITED_SHEET_NAME};
/// Re-export sheet type.
pub use sheet::Sheet;
