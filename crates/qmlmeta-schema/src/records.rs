//! Metatype record types
//!
//! These structs mirror the JSON schema consumed by the downstream
//! registration-code generator. Field names are camelCase on the wire;
//! array order is significant everywhere (registration order drives
//! stable codegen diffs), so every sequence preserves the order it was
//! built in.

use serde::Serialize;
use serde_json::Value;

/// One record per analyzed source file.
///
/// Files that contain no annotated classes still get a record with an
/// empty `classes` list, so downstream tooling can tell "scanned,
/// nothing found" apart from "never scanned".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub classes: Vec<ClassRecord>,
    pub input_file: String,
}

/// A class tagged for QML type registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub class_name: String,
    /// Currently always equal to `class_name`; scope resolution is out
    /// of scope for the analyzer.
    pub qualified_class_name: String,
    pub super_classes: Vec<SuperClassRecord>,
    pub class_infos: Vec<ClassInfo>,
    pub object: bool,
    pub properties: Vec<PropertyRecord>,
    pub signals: Vec<SignalRecord>,
}

/// One slot in a class's base list.
///
/// A base whose name could not be extracted keeps its slot with a
/// `null` name. Consumers rely on the list being parallel to the
/// source base list, so slots are never compacted away.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuperClassRecord {
    pub access: String,
    pub name: Option<String>,
}

impl SuperClassRecord {
    pub fn public(name: Option<String>) -> Self {
        SuperClassRecord {
            access: "public".to_string(),
            name,
        }
    }
}

/// Free-form key/value entry attached to a class record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInfo {
    pub name: String,
    pub value: Value,
}

impl ClassInfo {
    pub fn new(name: &str, value: impl Into<Value>) -> Self {
        ClassInfo {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// A property derived from a `Property(...)`-decorated accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub read: String,
    /// No distinct setter is resolved yet; `write` points at the same
    /// accessor as `read`. Consumers depend on this shape.
    pub write: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<String>,
}

/// A signal derived from a `name = Signal()` class-body assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    pub access: String,
    pub name: String,
    /// Signal parameters are not extracted yet; always empty.
    pub arguments: Vec<Value>,
    pub return_type: String,
}

impl SignalRecord {
    pub fn public(name: String) -> Self {
        SignalRecord {
            access: "public".to_string(),
            name,
            arguments: Vec::new(),
            return_type: "void".to_string(),
        }
    }
}
