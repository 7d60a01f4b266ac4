//! Index record value format.
//!
//! The stored value is a UTF-8 JSON object with exactly one key:
//! `{"mtime": "<seconds>.<6-digit-fraction>"}`. The timestamp is a decimal
//! *string*, not a JSON number — readers of the existing on-disk data
//! expect that exact shape, so it must not change.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Metadata stored for one chunk: the wall-clock write time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexRecord {
    /// Seconds since epoch with 6 fractional digits, e.g. `"1756512000.041377"`.
    pub mtime: String,
}

impl IndexRecord {
    /// Capture the current wall-clock time as a new record.
    pub fn now() -> Self {
        let now = Utc::now();
        IndexRecord {
            mtime: format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros()),
        }
    }

    /// Serialize to the wire JSON.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_mtime_shaped(s: &str) -> bool {
        // \d+\.\d{6}
        match s.split_once('.') {
            Some((secs, frac)) => {
                !secs.is_empty()
                    && secs.bytes().all(|b| b.is_ascii_digit())
                    && frac.len() == 6
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    #[test]
    fn test_mtime_shape() {
        let rec = IndexRecord::now();
        assert!(is_mtime_shaped(&rec.mtime), "bad mtime: {}", rec.mtime);
    }

    #[test]
    fn test_wire_shape_single_string_key() {
        let rec = IndexRecord {
            mtime: "1756512000.041377".to_string(),
        };
        let bytes = rec.to_bytes().expect("serialize");
        assert_eq!(bytes, br#"{"mtime":"1756512000.041377"}"#);

        let back: IndexRecord = serde_json::from_slice(&bytes).expect("decode");
        assert_eq!(back, rec);
    }
}
