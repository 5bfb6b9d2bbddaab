//! Output schema and writers for qmlmeta
//!
//! This crate owns everything that crosses the tool boundary: the
//! metatype record types consumed by qmltyperegistrar, the byte-stable
//! JSON writer, the qrc resource-list formatter, and the files-manifest
//! merge helper. It performs no source analysis of its own.

pub mod json;
pub mod manifest;
pub mod qrc;
pub mod records;

pub use records::{
    ClassInfo, ClassRecord, FileRecord, PropertyRecord, SignalRecord, SuperClassRecord,
};
