use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::models::modpack::ModpackCollection;
use crate::utils::errors::FinderError;
use crate::utils::Logger;

/// Replaces every occurrence of the separator inside a value, with a tab when
/// the separator is a space and with a space otherwise.
fn escape_value(value: &str, separator: &str) -> String {
    let replacement = if separator == " " { "\t" } else { " " };
    value.replace(separator, replacement)
}

/// Renders a header line plus one line per modpack, each newline-terminated.
pub fn to_delimited(
    modpacks: &ModpackCollection,
    fields: &[String],
    separator: &str,
    logger: &Logger,
) -> Result<String, FinderError> {
    logger.log(
        "to_delimited",
        format!(
            "Converting to CSV with [{}], using {} as a separator",
            fields.join(", "),
            separator
        ),
    );

    let mut csv = fields.join(separator);
    csv.push('\n');

    for record in modpacks.records() {
        let row = fields
            .iter()
            .map(|field| Ok(escape_value(&record.field_text(field)?, separator)))
            .collect::<Result<Vec<_>, FinderError>>()?;
        csv.push_str(&row.join(separator));
        csv.push('\n');
    }

    Ok(csv)
}

/// Prints to stdout (with one extra newline) when no path is given, otherwise
/// creates or truncates the file and writes the text unchanged.
pub fn write_output(csv: &str, path: Option<&Path>, logger: &Logger) -> Result<()> {
    match path {
        None => {
            logger.log("write_output", "Writing csv to stdout");
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", csv).with_context(|| "Failed to write to stdout")?;
            stdout.flush().with_context(|| "Failed to flush stdout")?;
        }
        Some(path) => {
            logger.log("write_output", format!("Writing csv to {}", path.display()));
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(csv.as_bytes())
                .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        }
    }
    Ok(())
}
