use serde::Serialize;
use std::fmt;

/// Highlighting class of a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// The library itself
    Keyword1,
    /// Callable declarations
    Keyword2,
    /// Type names and enum constants
    Literal1,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Keyword1 => "KEYWORD1",
            Tag::Keyword2 => "KEYWORD2",
            Tag::Literal1 => "LITERAL1",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `name<TAB>TAG` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub name: String,
    pub tag: Tag,
}

impl fmt::Display for KeywordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.tag)
    }
}

/// Everything extracted from one header.
///
/// `functions` and `types` are each free of duplicates; `enums` holds one
/// group per enum block and may repeat names within and across groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordListing {
    pub library: String,
    pub functions: Vec<String>,
    pub types: Vec<String>,
    pub enums: Vec<Vec<String>>,
}

/// Versions read from the three release sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub properties: String,
    pub manifest: String,
    pub header: String,
    pub matches: bool,
}

/// What a tree copy wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopyStats {
    pub directories: usize,
    pub files: usize,
}
