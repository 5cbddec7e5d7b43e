pub mod aggregator;
pub mod catalog;
pub mod detail;
pub mod fingerprint;
pub mod format;
pub mod health;
pub mod official;
pub mod snapshot;
