//! ariafix core library.
//!
//! This crate turns a markdown button-accessibility audit into structured
//! issue records and renders them as a CSV work list and a Markdown guide.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `extract`: Section splitting and checklist entry matching.
//! - `enrich`: Icon detection, suggested labels, module and context derivation.
//! - `table`: CSV rendering.
//! - `guide`: Markdown guide rendering.
//! - `pipeline`: Read → extract → enrich → write orchestration.
//! - `models`: Record types, grouping, and the run summary.
//! - `output`: Human/JSON console printers.
//! - `error`: The `AuditError` type.
//! - `utils`: Console prefixes.
pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod guide;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod table;
pub mod utils;
