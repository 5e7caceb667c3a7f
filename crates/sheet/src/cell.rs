use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Represents a cell value in a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Excel serial date/time (1900 date system)
    DateTime(f64),
    /// Elapsed time in days, as in `[h]:mm:ss` cells
    Duration(f64),
    /// Excel error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Get the value as a string
    #[must_use]
    pub fn as_str(&self) -> String {
        self.to_string()
    }
}

/// Convert an Excel serial number to a calendar date and time.
pub(crate) fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    // Serials below 60 sit before Excel's phantom 1900-02-29
    let days = if serial < 60.0 { serial + 1.0 } else { serial };
    let ms = (days * MS_PER_DAY).round() as i64;
    NaiveDate::from_ymd_opt(1899, 12, 30)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_milliseconds(ms)?)
}

fn fmt_datetime(serial: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Some(dt) = serial_to_datetime(serial) else {
        return write!(f, "{serial}");
    };
    if serial.fract().abs() < f64::EPSILON {
        write!(f, "{}", dt.format("%Y-%m-%d"))
    } else if serial < 1.0 {
        write!(f, "{}", dt.format("%H:%M:%S"))
    } else {
        write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn fmt_duration(days: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let total = (days.abs() * 86_400.0).round() as u64;
    let sign = if days < 0.0 { "-" } else { "" };
    write!(
        f,
        "{sign}{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) | CellValue::Error(s) => write!(f, "{s}"),
            CellValue::DateTime(serial) => fmt_datetime(*serial, f),
            CellValue::Duration(days) => fmt_duration(*days, f),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        for value in [
            CellValue::Null,
            CellValue::Bool(false),
            CellValue::Int(7),
            CellValue::Float(1.5),
            CellValue::from("Lan"),
            CellValue::Error("#N/A".to_string()),
        ] {
            assert_eq!(value.to_string(), value.as_str());
        }
    }

    #[test]
    fn test_datetime_display() {
        assert_eq!(CellValue::DateTime(45360.0).to_string(), "2024-03-09");
        assert_eq!(CellValue::DateTime(45360.5).to_string(), "2024-03-09 12:00:00");
        assert_eq!(CellValue::DateTime(0.75).to_string(), "18:00:00");
        assert_eq!(CellValue::DateTime(1.0).to_string(), "1900-01-01");
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(CellValue::Duration(1.5).to_string(), "36:00:00");
        assert_eq!(CellValue::Duration(-0.25).to_string(), "-6:00:00");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
        assert_eq!(CellValue::from(Some("An")), CellValue::from("An"));
    }
}
