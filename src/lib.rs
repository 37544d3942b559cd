pub mod engine;
pub mod extract;
pub mod ingest;
pub mod models;
pub mod output;
pub mod types;

pub use engine::Converter;
pub use models::DonationRecord;
pub use types::ConvertError;
