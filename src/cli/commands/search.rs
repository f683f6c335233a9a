//! Search command: single-student lookup

use super::shared::extract_document;
use crate::app::services::result_queries::{LookupKey, find_student};
use crate::cli::args::{GlobalArgs, OutputFormat, SearchArgs};
use crate::cli::report::{print_json, print_student_detail};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;

/// Lookup key from whichever flag was given
pub fn lookup_key(args: &SearchArgs) -> Result<LookupKey> {
    match (&args.seat, &args.name, &args.prn) {
        (Some(seat), None, None) => Ok(LookupKey::SeatNumber(seat.clone())),
        (None, Some(name), None) => Ok(LookupKey::Name(name.clone())),
        (None, None, Some(prn)) => Ok(LookupKey::RegistrationNumber(prn.clone())),
        _ => Err(Error::configuration(
            "Search needs exactly one of --seat, --name or --prn",
        )),
    }
}

pub async fn run_search(global: &GlobalArgs, args: &SearchArgs, config: &Config) -> Result<()> {
    let key = lookup_key(args)?;
    let batch = extract_document(&args.input, config).await?;
    let found = find_student(&batch, &key);

    match (global.output_format, found) {
        (OutputFormat::Json, found) => print_json(&found)?,
        (OutputFormat::Human, Some(record)) => print_student_detail(record),
        (OutputFormat::Human, None) => {
            println!("{} no student matches {:?}", "❌".red(), key);
        }
    }

    Ok(())
}
