//! Handlers behind each CLI command.
//!
//! Resource handlers follow the same sequence: resolve the context, build the
//! request (including any config assembly), and only then connect to the
//! cluster. Bad input therefore fails before Kubernetes is contacted.

use crate::{
    error::CliError,
    format::{format_rows, Formattable, OutputFormat},
    param_utils::get_format_parameter_value,
};
use clap::ArgMatches;
use serde::Serialize;
use tabled::Tabled;

pub mod config;
pub mod integrations;
pub mod roles;
pub mod streams;
pub mod users;

pub(crate) fn print_formatted<T: Formattable>(
    value: &T,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let format = get_format_parameter_value(sub_matches)?;
    println!("{}", value.format(&format)?);
    Ok(())
}

/// Prints a listing. An empty table is replaced by `empty_message` on stderr;
/// JSON and CSV still print their (empty) document.
pub(crate) fn print_rows<T: Serialize + Tabled>(
    rows: &[T],
    sub_matches: &ArgMatches,
    empty_message: &str,
) -> Result<(), CliError> {
    let format = get_format_parameter_value(sub_matches)?;
    if rows.is_empty() && matches!(format, OutputFormat::Table(_)) {
        eprintln!("{}", empty_message);
        return Ok(());
    }
    println!("{}", format_rows(rows, &format)?);
    Ok(())
}
