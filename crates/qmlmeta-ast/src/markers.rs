//! Annotation recognition
//!
//! The annotation convention is a closed set of markers recognized by
//! name: `QmlElement` and `QmlUncreatable` on classes, `Property` on
//! accessors, `Signal` on class-body assignments. A marker name is
//! extracted from a bare identifier or from the callee of a call;
//! every other expression shape (attribute access, subscripts, ...)
//! resolves to no name and is ignored.

use serde_json::Value;

use crate::parse::PyNode;

pub const ELEMENT_MARKER: &str = "QmlElement";
pub const UNCREATABLE_MARKER: &str = "QmlUncreatable";
pub const PROPERTY_MARKER: &str = "Property";
pub const SIGNAL_MARKER: &str = "Signal";

/// A classified annotation expression.
///
/// `Uncreatable` and `Property` keep the annotation node because their
/// arguments still need to be picked apart by the extractors.
pub enum Marker<'t> {
    Element,
    Uncreatable(PyNode<'t>),
    Property(PyNode<'t>),
    Signal,
    Unrecognized,
}

/// Classify one annotation expression by its extracted name.
pub fn classify<'t>(expr: &PyNode<'t>) -> Marker<'t> {
    match extract_name(expr).as_deref() {
        Some(ELEMENT_MARKER) => Marker::Element,
        Some(UNCREATABLE_MARKER) => Marker::Uncreatable(expr.clone()),
        Some(PROPERTY_MARKER) => Marker::Property(expr.clone()),
        Some(SIGNAL_MARKER) => Marker::Signal,
        _ => Marker::Unrecognized,
    }
}

/// Extract the name of an expression: an identifier's text, or the
/// name of a call's callee. Anything else has no name.
pub fn extract_name(node: &PyNode<'_>) -> Option<String> {
    match node.kind().as_ref() {
        "identifier" => Some(node.text().to_string()),
        "call" => node.field("function").and_then(|f| extract_name(&f)),
        _ => None,
    }
}

/// Extract a literal constant as a JSON value; `None` for anything
/// that is not a plain literal.
pub fn extract_constant(node: &PyNode<'_>) -> Option<Value> {
    match node.kind().as_ref() {
        "string" => Some(Value::String(string_content(node))),
        "integer" => node.text().parse::<i64>().ok().map(Value::from),
        "float" => node.text().parse::<f64>().ok().map(Value::from),
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "none" => Some(Value::Null),
        _ => None,
    }
}

fn string_content(string_node: &PyNode<'_>) -> String {
    // The grammar splits string literals into start/content/end tokens;
    // an empty literal simply has no content token.
    string_node
        .children()
        .filter(|c| c.kind().as_ref() == "string_content")
        .map(|c| c.text().to_string())
        .collect()
}

/// Positional entries of a call's argument list, keyword arguments
/// excluded.
pub fn positional_arguments<'t>(call: &PyNode<'t>) -> Vec<PyNode<'t>> {
    argument_entries(call)
        .into_iter()
        .filter(|entry| entry.kind().as_ref() != "keyword_argument")
        .collect()
}

/// `(name, value)` pairs for a call's keyword arguments, in order.
pub fn keyword_arguments<'t>(call: &PyNode<'t>) -> Vec<(String, PyNode<'t>)> {
    argument_entries(call)
        .into_iter()
        .filter(|entry| entry.kind().as_ref() == "keyword_argument")
        .filter_map(|entry| {
            let name = entry.field("name")?.text().to_string();
            let value = entry.field("value")?;
            Some((name, value))
        })
        .collect()
}

fn argument_entries<'t>(call: &PyNode<'t>) -> Vec<PyNode<'t>> {
    call.field("arguments")
        .map(|list| {
            list.children()
                .filter(|c| !matches!(c.kind().as_ref(), "(" | ")" | "," | "comment"))
                .collect()
        })
        .unwrap_or_default()
}
