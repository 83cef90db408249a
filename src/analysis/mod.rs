pub mod boundary;
pub mod comments;
pub mod functions;
pub mod types;

pub use boundary::public_prefix;
pub use comments::strip_comments;
pub use functions::extract_functions;
pub use types::{enum_blocks, enum_constants, extract_type_names};

use crate::output::KeywordListing;
use tracing::debug;

/// Run all three passes over a header and collect the listing.
///
/// Function names come only from the public prefix of the header, while
/// type names and enum constants come from the whole file. Existing
/// listings depend on this asymmetry, so the passes are kept separate.
pub fn extract(header_text: &str, library: &str) -> KeywordListing {
    let public = strip_comments(public_prefix(header_text));
    debug!(public_bytes = public.len(), total_bytes = header_text.len(), "public prefix");

    let functions = extract_functions(&public);

    let full = strip_comments(header_text);
    let types = extract_type_names(&full);
    let enums: Vec<Vec<String>> = enum_blocks(&full).into_iter().map(enum_constants).collect();

    debug!(
        functions = functions.len(),
        types = types.len(),
        enum_blocks = enums.len(),
        "extracted keywords"
    );

    KeywordListing {
        library: library.to_string(),
        functions,
        types,
        enums,
    }
}
