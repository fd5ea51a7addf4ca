//! Domain models for the admin service.

pub mod record;

pub use record::AdminRecord;
