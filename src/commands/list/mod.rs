use anyhow::{Context, Result};

use crate::api::CatalogSource;
use crate::export;
use crate::models::config::{FinderConfig, ModId};
use crate::models::modpack::ModpackCollection;
use crate::utils::Logger;

/// Requests pages 1, 2, 3, ... until one comes back empty, then optionally
/// sorts the whole collection by `sort_key`, highest first.
pub fn fetch_modpacks<S: CatalogSource + ?Sized>(
    source: &S,
    mod_id: &ModId,
    sort_key: Option<&str>,
    logger: &Logger,
) -> Result<ModpackCollection> {
    logger.log(
        "fetch_modpacks",
        format!("Getting modpacks for mod with id {}", mod_id),
    );

    let mut modpacks = ModpackCollection::new();
    let mut page = 1;
    loop {
        let data = source
            .fetch_page(mod_id, page)
            .with_context(|| format!("Failed to fetch page {} of modpacks for mod {}", page, mod_id))?;
        if data.is_empty() {
            break;
        }
        logger.log(
            "fetch_modpacks",
            format!("Got page {}: {} results", page, data.len()),
        );
        modpacks.extend(data);
        page += 1;
    }

    logger.log(
        "fetch_modpacks",
        format!("All modpacks have been found: {} entries", modpacks.len()),
    );

    if let Some(key) = sort_key {
        logger.log("fetch_modpacks", format!("Sorting result by {}", key));
        modpacks.sort_descending(key)?;
    }

    Ok(modpacks)
}

pub fn run<S: CatalogSource + ?Sized>(source: &S, config: &FinderConfig) -> Result<()> {
    let logger = Logger::new(config.logs_enabled);

    let modpacks = fetch_modpacks(source, &config.mod_id, config.sort_key(), &logger)?;
    let csv = export::to_delimited(
        &modpacks,
        &config.selected_fields,
        &config.separator,
        &logger,
    )?;
    export::write_output(&csv, config.output_path.as_deref(), &logger)?;

    Ok(())
}
