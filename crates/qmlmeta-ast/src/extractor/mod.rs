//! Class metadata extraction
//!
//! Turns one `class_definition` node into a `ClassRecord`, or `None`
//! when the class does not carry the `QmlElement` marker. All shape
//! mismatches below that gate are silent non-matches: a half-written
//! annotation must never abort analysis.

use qmlmeta_schema::{ClassInfo, ClassRecord, SuperClassRecord};
use serde_json::Value;
use tracing::debug;

use crate::markers::{classify, extract_constant, extract_name, positional_arguments, Marker};
use crate::parse::PyNode;

mod members;


/// Extract the metatype record for one class definition.
pub fn extract_class(class_node: &PyNode<'_>) -> Option<ClassRecord> {
    let decorators = decorator_expressions(class_node);
    if !decorators
        .iter()
        .any(|d| matches!(classify(d), Marker::Element))
    {
        return None;
    }

    let class_name = class_node.field("name")?.text().to_string();
    debug!("Found QmlElement class: {}", class_name);

    let mut class_infos = vec![ClassInfo::new("QML.Element", "auto")];
    for decorator in &decorators {
        if let Marker::Uncreatable(marker) = classify(decorator) {
            append_uncreatable_infos(&marker, &mut class_infos);
        }
    }

    let super_classes = base_expressions(class_node)
        .iter()
        .map(|base| SuperClassRecord::public(extract_name(base)))
        .collect();

    let (properties, signals) = members::extract_members(class_node);

    Some(ClassRecord {
        qualified_class_name: class_name.clone(),
        class_name,
        super_classes,
        class_infos,
        object: true,
        properties,
        signals,
    })
}

/// Class-info entries for an uncreatable marker: `QML.Creatable: false`
/// followed by the reason. The marker is expected to be a call with the
/// reason as its first argument; a bare or argument-less marker
/// contributes nothing. A non-literal reason keeps the entry pair but
/// records the reason as null.
fn append_uncreatable_infos(marker: &PyNode<'_>, class_infos: &mut Vec<ClassInfo>) {
    if marker.kind().as_ref() != "call" {
        return;
    }
    let arguments = positional_arguments(marker);
    let Some(first) = arguments.first() else {
        return;
    };
    let reason = extract_constant(first).unwrap_or(Value::Null);

    class_infos.push(ClassInfo::new("QML.Creatable", false));
    class_infos.push(ClassInfo::new("QML.UncreatableReason", reason));
}

/// Annotation expressions attached to a definition, in source order.
///
/// Decorators live on the `decorated_definition` wrapper, so a bare
/// definition has none.
pub(crate) fn decorator_expressions<'t>(definition: &PyNode<'t>) -> Vec<PyNode<'t>> {
    let Some(parent) = definition.parent() else {
        return Vec::new();
    };
    if parent.kind().as_ref() != "decorated_definition" {
        return Vec::new();
    }
    parent
        .children()
        .filter(|child| child.kind().as_ref() == "decorator")
        .filter_map(|decorator| {
            decorator
                .children()
                .find(|child| !matches!(child.kind().as_ref(), "@" | "comment"))
        })
        .collect()
}

/// Positional base expressions of a class, keyword entries such as
/// `metaclass=` excluded. Arity matters: callers map every slot.
fn base_expressions<'t>(class_node: &PyNode<'t>) -> Vec<PyNode<'t>> {
    class_node
        .field("superclasses")
        .map(|list| {
            list.children()
                .filter(|child| {
                    !matches!(
                        child.kind().as_ref(),
                        "(" | ")" | "," | "comment" | "keyword_argument"
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}
