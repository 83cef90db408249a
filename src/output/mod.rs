pub mod format;
pub mod listing;
pub mod types;

pub use format::{output, should_use_json};
pub use listing::{render_listing, write_listing};
pub use types::{CopyStats, KeywordEntry, KeywordListing, Tag, VersionReport};
