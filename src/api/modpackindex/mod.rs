pub mod schema;

use anyhow::{anyhow, Context, Result};
use std::env;
use url::Url;

use super::CatalogSource;
use crate::models::config::ModId;
use crate::models::modpack::ModpackRecord;
use crate::utils::errors::FinderError;

const MODPACK_INDEX_API_URL_PROD: &str = "https://www.modpackindex.com/api/v1";
pub const API_URL_ENV: &str = "MODPACK_INDEX_API_URL";
pub const PAGE_SIZE: u32 = 100;

pub struct ModpackIndexClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ModpackIndexClient {
    /// Uses `MODPACK_INDEX_API_URL` when set, the public API otherwise.
    pub fn new() -> Result<Self> {
        let base_url =
            env::var(API_URL_ENV).unwrap_or_else(|_| MODPACK_INDEX_API_URL_PROD.to_string());
        Self::new_with_base_url(&base_url)
    }

    pub fn new_with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn modpacks_url(&self, mod_id: &ModId, page: u32) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| anyhow!(FinderError::InvalidBaseUrl(self.base_url.clone())))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!(FinderError::InvalidBaseUrl(self.base_url.clone())))?
            .pop_if_empty()
            .push("mod")
            .push(mod_id.as_str())
            .push("modpacks");

        url.query_pairs_mut()
            .append_pair("limit", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());

        Ok(url)
    }

    pub fn get_modpacks_page(&self, mod_id: &ModId, page: u32) -> Result<Vec<ModpackRecord>> {
        let url = self.modpacks_url(mod_id, page)?;

        let response = self.client.get(url).send().with_context(|| {
            format!(
                "Failed to send request to Modpack Index API for mod ID {} page {}",
                mod_id, page
            )
        })?;

        if !response.status().is_success() {
            return Err(anyhow!(FinderError::CatalogApiError(format!(
                "API request failed with status: {}",
                response.status()
            ))));
        }

        let result: schema::GetModpacksResponse = response
            .json()
            .with_context(|| format!("Failed to parse modpacks page {} for mod ID {}", page, mod_id))?;

        Ok(result.data)
    }
}

impl CatalogSource for ModpackIndexClient {
    fn fetch_page(&self, mod_id: &ModId, page: u32) -> Result<Vec<ModpackRecord>> {
        self.get_modpacks_page(mod_id, page)
    }
}
