//! Chunk index subsystem — composite keys + timestamp records + the
//! per-volume store manager.

pub mod key;
pub mod manager;
pub mod record;
