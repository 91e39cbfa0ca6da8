//! Loads bank operations from JSON, CSV or XLSX files, normalizes them into one record
//! shape and runs filter, sort, search and counting stages over them for a text report.

pub mod masking;
pub mod models;
pub mod normalizer;
pub mod options;
pub mod query;
pub mod rates;
pub mod report;
pub mod sources;
pub mod types;
