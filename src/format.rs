//! Output formatting for listings and views.
//!
//! Supports an aligned text table (the default), JSON and CSV.

use serde::Serialize;
use std::str::FromStr;
use strum::EnumIter;
use tabled::{settings::Style, Table, Tabled};

pub const TABLE: &str = "table";
pub const JSON: &str = "json";
pub const CSV: &str = "csv";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    /// Error specific to CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Error when converting bytes to UTF-8 string
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
}

#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct OutputFormatOptions {
    pub with_headers: bool,
    pub pretty: bool,
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    /// Whitespace-aligned columns for terminals
    Table(OutputFormatOptions),
    /// JSON (JavaScript Object Notation) format
    Json(OutputFormatOptions),
    /// CSV (Comma-Separated Values) format
    Csv(OutputFormatOptions),
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![TABLE, JSON, CSV]
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        match format_str.to_lowercase().as_str() {
            TABLE => Ok(OutputFormat::Table(options)),
            JSON => Ok(OutputFormat::Json(options)),
            CSV => Ok(OutputFormat::Csv(options)),
            other => Err(FormattingError::UnsupportedOutputFormat(other.to_string())),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Table(_) => write!(f, "{}", TABLE),
            OutputFormat::Json(_) => write!(f, "{}", JSON),
            OutputFormat::Csv(_) => write!(f, "{}", CSV),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

/// Formats a homogeneous list of rows. Tables always carry a header line;
/// CSV only when `with_headers` is set.
pub fn format_rows<T: Serialize + Tabled>(
    rows: &[T],
    f: &OutputFormat,
) -> Result<String, FormattingError> {
    match f {
        OutputFormat::Table(_) => {
            let mut table = Table::new(rows);
            table.with(Style::blank());
            Ok(table.to_string())
        }
        OutputFormat::Json(options) => {
            if options.pretty {
                Ok(serde_json::to_string_pretty(rows)?)
            } else {
                Ok(serde_json::to_string(rows)?)
            }
        }
        OutputFormat::Csv(options) => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            if options.with_headers {
                wtr.write_record(T::headers().iter().map(|h| h.as_ref()))?;
            }
            for row in rows {
                wtr.write_record(row.fields().iter().map(|field| field.as_ref()))?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
    }
}

impl<T: Serialize + Tabled> Formattable for Vec<T> {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        format_rows(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{Profile, ProfileStore};

    fn store() -> ProfileStore {
        let mut store = ProfileStore::default();
        store.set("prod", Profile::new("eks", "ingext-prod", ""));
        store.set("dev", Profile::new("aks", "ingext", "dev-ctx"));
        store.set_active("prod").unwrap();
        store
    }

    #[test]
    fn test_format_names() {
        for name in OutputFormat::names() {
            let format = OutputFormat::from_str(name).unwrap();
            assert_eq!(format.to_string(), name);
        }
        assert!(OutputFormat::from_str("TABLE").is_ok());
        assert!(matches!(
            OutputFormat::from_str("tree"),
            Err(FormattingError::UnsupportedOutputFormat(_))
        ));
    }

    #[test]
    fn test_profile_table() {
        let output = store().list().format(&OutputFormat::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("CURRENT"));
        assert!(lines[0].contains("CLUSTER"));
        assert!(lines[1].contains("dev"));
        assert!(!lines[1].contains('*'));
        assert!(lines[2].contains('*'));
        assert!(lines[2].contains("prod"));
    }

    #[test]
    fn test_profile_csv() {
        let options = OutputFormatOptions {
            with_headers: true,
            pretty: false,
        };
        let output = store().list().format(&OutputFormat::Csv(options)).unwrap();
        assert_eq!(
            output,
            "CURRENT,CLUSTER,PROVIDER,NAMESPACE,CONTEXT\n,dev,aks,ingext,dev-ctx\n*,prod,eks,ingext-prod,\n"
        );

        let output = store()
            .list()
            .format(&OutputFormat::Csv(OutputFormatOptions::default()))
            .unwrap();
        assert!(!output.contains("CLUSTER"));
    }

    #[test]
    fn test_profile_json() {
        let output = store()
            .list()
            .format(&OutputFormat::Json(OutputFormatOptions::default()))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[1]["name"], "prod");
        assert_eq!(value[1]["active"], true);
    }
}
