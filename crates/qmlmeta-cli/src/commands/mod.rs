//! Subcommand handlers

pub mod dump;
pub mod manifest;
pub mod qrc;
