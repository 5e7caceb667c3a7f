use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{Data, Range, Reader, Xls, Xlsx};
use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook, Worksheet};
use std::io::{Cursor, Read, Seek};

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Duration(dt.as_f64()),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

/// Build rows at their absolute positions. calamine ranges start at the first
/// used cell, so leading empty rows and columns are restored here.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut data: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];

    for row in range.rows() {
        let mut row_data: Vec<CellValue> = vec![CellValue::Null; start_col as usize];
        row_data.extend(row.iter().map(data_to_cell_value));
        while row_data.last().is_some_and(CellValue::is_null) {
            row_data.pop();
        }
        data.push(row_data);
    }

    data
}

/// Read every worksheet of an open workbook, in workbook order
fn read_workbook<RS, R>(workbook: &mut R) -> Result<Book>
where
    RS: Read + Seek,
    R: Reader<RS>,
    SheetError: From<R::Error>,
{
    let mut book = Book::new();

    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)?;

        let mut sheet = Sheet::with_name(&sheet_name);
        *sheet.data_mut() = range_to_rows(&range);
        tracing::debug!(
            sheet = %sheet_name,
            rows = sheet.row_count(),
            cols = sheet.col_count(),
            "loaded worksheet"
        );

        book.add_sheet(&sheet_name, sheet)?;
    }

    Ok(book)
}

/// Number formats for date-like cells, created once per workbook
struct DateFormats {
    date: Format,
    time: Format,
    datetime: Format,
    duration: Format,
}

impl DateFormats {
    fn new() -> Self {
        DateFormats {
            date: Format::new().set_num_format("yyyy-mm-dd"),
            time: Format::new().set_num_format("hh:mm:ss"),
            datetime: Format::new().set_num_format("yyyy-mm-dd hh:mm:ss"),
            duration: Format::new().set_num_format("[h]:mm:ss"),
        }
    }

    fn for_serial(&self, serial: f64) -> &Format {
        if serial.fract().abs() < f64::EPSILON {
            &self.date
        } else if serial < 1.0 {
            &self.time
        } else {
            &self.datetime
        }
    }
}

/// Write sheet data to a worksheet
fn write_to_worksheet(sheet: &Sheet, worksheet: &mut Worksheet, formats: &DateFormats) -> Result<()> {
    worksheet.set_name(sheet.name())?;

    for (row_idx, row) in sheet.data().iter().enumerate() {
        let row_num = u32::try_from(row_idx)
            .map_err(|_| SheetError::Serialize("Row index overflow".to_string()))?;

        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = u16::try_from(col_idx)
                .map_err(|_| SheetError::Serialize("Column index overflow".to_string()))?;

            match cell {
                CellValue::Null => {} // Leave empty
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row_num, col_num, *b)?;
                }
                CellValue::Int(i) => {
                    // Excel stores all numbers as f64, so integers > 2^53 may lose precision
                    worksheet.write_number(row_num, col_num, *i as f64)?;
                }
                CellValue::Float(f) => {
                    worksheet.write_number(row_num, col_num, *f)?;
                }
                CellValue::String(s) => {
                    worksheet.write_string(row_num, col_num, s)?;
                }
                CellValue::DateTime(serial) => {
                    let format = formats.for_serial(*serial);
                    match ExcelDateTime::from_serial_datetime(*serial) {
                        Ok(dt) => worksheet.write_datetime_with_format(row_num, col_num, &dt, format)?,
                        // Outside 1900-9999: keep the raw serial under the same format
                        Err(_) => worksheet.write_number_with_format(row_num, col_num, *serial, format)?,
                    };
                }
                CellValue::Duration(days) => {
                    worksheet.write_number_with_format(row_num, col_num, *days, &formats.duration)?;
                }
                CellValue::Error(literal) => {
                    // An error constant as the formula keeps the cell an error in Excel
                    let formula = Formula::new(format!("={literal}")).set_result(literal);
                    worksheet.write_formula(row_num, col_num, formula)?;
                }
            }
        }
    }

    Ok(())
}

impl Book {
    /// Parse an in-memory Excel workbook (all sheets, in workbook order)
    pub fn from_xlsx_bytes(bytes: &[u8]) -> Result<Self> {
        let mut workbook: Xlsx<Cursor<&[u8]>> = Xlsx::new(Cursor::new(bytes))?;
        read_workbook(&mut workbook)
    }

    /// Parse an in-memory legacy Excel 97-2003 workbook
    pub fn from_xls_bytes(bytes: &[u8]) -> Result<Self> {
        let mut workbook: Xls<Cursor<&[u8]>> = Xls::new(Cursor::new(bytes))?;
        read_workbook(&mut workbook)
    }

    /// Serialize the book to an in-memory Excel workbook
    pub fn to_xlsx_bytes(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let formats = DateFormats::new();

        for (_, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            write_to_worksheet(sheet, worksheet, &formats)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}
