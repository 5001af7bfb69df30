pub mod modpackindex;

use anyhow::Result;

use crate::models::config::ModId;
use crate::models::modpack::ModpackRecord;

/// A paginated listing of the modpacks that include a given mod.
pub trait CatalogSource {
    /// Returns one page (1-based). An empty page marks the end of the listing.
    fn fetch_page(&self, mod_id: &ModId, page: u32) -> Result<Vec<ModpackRecord>>;
}
