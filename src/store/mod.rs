//! In-memory record store
//!
//! This module holds the user records for the lifetime of the session:
//! - `record` - The record type and its identifier
//! - `record_store` - The ordered store that owns every record
//!
//! Nothing here touches disk; records are lost when the process exits.

pub mod record;
pub mod record_store;

pub use record::{Record, RecordId};
pub use record_store::{RecordStore, SEED_RECORDS};
