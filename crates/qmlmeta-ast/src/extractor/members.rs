//! Member metadata extraction
//!
//! Walks the direct body statements of an annotated class and derives
//! property records from `Property(...)`-decorated accessors and
//! signal records from `name = Signal()` assignments. Nested scopes
//! are not entered; a signal defined inside a method body is not a
//! class signal.

use qmlmeta_schema::{PropertyRecord, SignalRecord};
use tracing::debug;

use crate::markers::{classify, extract_name, keyword_arguments, positional_arguments, Marker};
use crate::parse::PyNode;
use crate::typemap::map_to_qt_type;

use super::decorator_expressions;

/// Properties and signals of a class body, each sequence in source
/// order.
pub(crate) fn extract_members(class_node: &PyNode<'_>) -> (Vec<PropertyRecord>, Vec<SignalRecord>) {
    let mut properties = Vec::new();
    let mut signals = Vec::new();

    let Some(body) = class_node.field("body") else {
        return (properties, signals);
    };

    for statement in body.children() {
        match statement.kind().as_ref() {
            "expression_statement" => {
                let assignment = statement
                    .children()
                    .find(|child| child.kind().as_ref() == "assignment");
                if let Some(signal) = assignment.as_ref().and_then(signal_from_assignment) {
                    signals.push(signal);
                }
            }
            "function_definition" => {
                if let Some(property) = property_from_function(&statement) {
                    properties.push(property);
                }
            }
            "decorated_definition" => {
                let definition = statement
                    .field("definition")
                    .filter(|def| def.kind().as_ref() == "function_definition");
                if let Some(property) = definition.as_ref().and_then(property_from_function) {
                    properties.push(property);
                }
            }
            _ => {}
        }
    }

    (properties, signals)
}

/// Signal detection: a plain assignment with exactly one named target
/// whose right-hand side is a `Signal` constructor call.
fn signal_from_assignment(assignment: &PyNode<'_>) -> Option<SignalRecord> {
    // Annotated assignments (`x: Signal = ...`) are a different
    // statement class upstream and are not signal declarations.
    if assignment.field("type").is_some() {
        return None;
    }

    let right = assignment.field("right")?;
    if !matches!(classify(&right), Marker::Signal) {
        return None;
    }

    // Chained (`a = b = Signal()`) and tuple targets have no single
    // extractable name and are rejected above or here.
    let target = assignment.field("left")?;
    let name = extract_name(&target)?;

    debug!("Found signal: {}", name);
    Some(SignalRecord::public(name))
}

/// Property detection: the first `Property` decorator on an accessor,
/// which must be a call whose first positional argument names a type.
fn property_from_function(function: &PyNode<'_>) -> Option<PropertyRecord> {
    let decorators = decorator_expressions(function);
    let marker = decorators.iter().find_map(|d| match classify(d) {
        Marker::Property(node) => Some(node),
        _ => None,
    })?;

    if marker.kind().as_ref() != "call" {
        return None;
    }
    let arguments = positional_arguments(&marker);
    let type_name = extract_name(arguments.first()?)?;

    let name = function.field("name")?.text().to_string();
    debug!("Found property: {} ({})", name, type_name);

    let mut record = PropertyRecord {
        type_name: map_to_qt_type(&type_name).to_string(),
        name: name.clone(),
        read: name.clone(),
        // No distinct setter is resolved; both accessors point at the
        // declared function.
        write: name,
        notify: None,
    };

    for (keyword, value) in keyword_arguments(&marker) {
        if keyword == "notify" {
            record.notify = extract_name(&value);
        }
    }

    Some(record)
}
