//! Composite key encoding for index records.
//!
//! A record is addressed by `content_cid|content_path|chunk_id`, the three
//! components joined with a literal `|` and written as raw UTF-8 bytes.
//! No escaping is applied: a component that itself contains `|` (a path
//! like `a|b`) produces a key indistinguishable from a different logical
//! tuple. That collision risk is inherited from the on-disk format and is
//! left as-is rather than silently changing the encoding.

/// Separator between the three key components.
pub const SEPARATOR: char = '|';

/// Identifies one indexed chunk: parent container, content path, chunk id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkKey {
    pub content_cid: String,
    pub content_path: String,
    pub chunk_id: String,
}

impl ChunkKey {
    pub fn new(content_cid: &str, content_path: &str, chunk_id: &str) -> Self {
        ChunkKey {
            content_cid: content_cid.to_string(),
            content_path: content_path.to_string(),
            chunk_id: chunk_id.to_string(),
        }
    }

    /// Encode to the on-disk key string `content_cid|content_path|chunk_id`.
    pub fn encode(&self) -> String {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.content_cid, self.content_path, self.chunk_id
        )
    }

    /// True if any component contains the separator, i.e. the encoded key
    /// is ambiguous.
    pub fn is_ambiguous(&self) -> bool {
        self.content_cid.contains(SEPARATOR)
            || self.content_path.contains(SEPARATOR)
            || self.chunk_id.contains(SEPARATOR)
    }
}
