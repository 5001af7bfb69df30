pub mod errors;
pub mod logger;

pub use logger::Logger;
