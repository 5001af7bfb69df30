use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("mod_id is not an int: '{0}'")]
    InvalidModId(String),

    #[error("Failed to access Modpack Index API: {0}")]
    CatalogApiError(String),

    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Key not found in modpack record: '{0}'")]
    KeyNotFound(String),

    #[error("Cannot sort by '{0}': values are not all numbers, all strings or all booleans")]
    IncomparableValues(String),
}
