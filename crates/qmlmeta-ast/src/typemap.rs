//! Python-to-Qt type name translation

/// Translate a Python-level type name into the Qt metatype vocabulary.
///
/// Total and pure: names without a known Qt alias pass through
/// unchanged, which is correct for Qt classes referenced directly
/// (`QColor`, user types) and for `int`/`bool`, which Qt spells the
/// same way.
pub fn map_to_qt_type(py_name: &str) -> &str {
    match py_name {
        "float" => "qreal",
        "str" => "QString",
        _ => py_name,
    }
}
