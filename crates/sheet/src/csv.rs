use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use std::io::{Read, Write};

/// CSV reader/writer options
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvOptions {
    /// Create options for TSV (tab-separated values)
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }
}

impl Sheet {
    /// Load a sheet from a reader. Records may have different lengths and every
    /// field is kept as text, so cells such as `007` survive a round trip.
    pub fn from_csv_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut data: Vec<Vec<CellValue>> = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| CellValue::String(field.to_string()))
                .collect();
            data.push(row);
        }

        let mut sheet = Sheet::with_name("Sheet1");
        *sheet.data_mut() = data;
        Ok(sheet)
    }

    /// Write the sheet to a writer as CSV
    pub fn write_csv<W: Write>(&self, writer: W, options: &CsvOptions) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .flexible(true)
            .from_writer(writer);

        for row in self.data() {
            let record: Vec<String> = row.iter().map(CellValue::as_str).collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Convert the sheet to a CSV string
    #[must_use]
    pub fn to_csv_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_csv(&mut buffer, &CsvOptions::default());
        String::from_utf8_lossy(&buffer).to_string()
    }
}

impl Book {
    /// Parse CSV bytes into a single-sheet book. A leading UTF-8 BOM is
    /// remembered so that `to_csv_bytes` writes it back.
    pub fn from_csv_bytes(bytes: &[u8], sheet_name: &str, options: &CsvOptions) -> Result<Self> {
        let (bytes, utf8_bom) = match bytes.strip_prefix(UTF8_BOM) {
            Some(rest) => (rest, true),
            None => (bytes, false),
        };
        let sheet = Sheet::from_csv_reader(bytes, options)?;
        Ok(Book::single(sheet_name, sheet).with_utf8_bom(utf8_bom))
    }

    /// Serialize a single-sheet book to CSV bytes
    pub fn to_csv_bytes(&self, options: &CsvOptions) -> Result<Vec<u8>> {
        if self.sheet_count() != 1 {
            return Err(SheetError::Serialize(format!(
                "CSV holds exactly one sheet, book has {}",
                self.sheet_count()
            )));
        }

        let sheet = self.get_sheet_by_index(0)?;
        let mut buffer = Vec::new();
        if self.has_utf8_bom() {
            buffer.extend_from_slice(UTF8_BOM);
        }
        sheet.write_csv(&mut buffer, options)?;
        Ok(buffer)
    }
}
