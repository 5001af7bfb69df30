pub mod flags;

use std::path::PathBuf;

use crate::models::config::{split_fields, FinderConfig, ModId};
use crate::utils::errors::FinderError;
use flags::ScannedFlags;

const DEFAULT_PROGRAM_NAME: &str = "modpack-finder";

#[derive(Debug, PartialEq)]
pub enum Invocation {
    /// Print usage and exit successfully.
    Help,
    Run(FinderConfig),
}

/// Parses the full process argument list, program name included.
pub fn parse_args(args: &[String]) -> Result<Invocation, FinderError> {
    if flags::wants_help(args) {
        return Ok(Invocation::Help);
    }

    let mod_id: ModId = args[1].parse()?;
    let flags = ScannedFlags::scan(args);

    let mut config = FinderConfig::new(mod_id);
    config.logs_enabled = flags.is_present("--logs");
    if let Some(sort) = flags.value("--sort") {
        config.sort_key = sort.to_string();
    }
    if let Some(data) = flags.value("--data") {
        config.selected_fields = split_fields(data);
    }
    config.output_path = flags
        .value("--file")
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);
    if let Some(separator) = flags.value("--sep") {
        config.separator = separator.to_string();
    }

    Ok(Invocation::Run(config))
}

pub fn usage(program: Option<&str>) -> String {
    let program = program.unwrap_or(DEFAULT_PROGRAM_NAME);
    format!(
        "Usage:\n\
         {program} mod_id [--logs] [--sort attribute] [--data attributes] [--file filename] [--sep separator]\n\
         \n\
         mod_id: the id of the mod\n\
         --logs: if this option is enabled, logs will be printed to stderr\n\
         --sort attribute: the attribute to sort by, defaults to download_count (sorting is done in decreasing order, an empty attribute disables sorting)\n\
         --data attributes: the data to put inside the csv, defaults to \"name,download_count,url\" (attributes is a comma separated value, eg: \"name,id\")\n\
         --file filename: the file to write to, if this argument is not provided (or is empty) the csv will be printed to stdout\n\
         --sep separator: the separator to use in the csv file, defaults to ;"
    )
}
