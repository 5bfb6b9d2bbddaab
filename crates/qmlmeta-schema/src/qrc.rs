//! Qt resource collection (.qrc) rendering
//!
//! Pure formatting: given an already-discovered file list, emit the
//! fixed-schema XML document Qt's resource compiler expects. No
//! escaping or path analysis happens here.

use std::fmt::Write;

const PROLOGUE: &str = "<RCC>\n    <qresource prefix=\"/\">\n";
const EPILOGUE: &str = "    </qresource>\n</RCC>\n";

/// Render the qrc document for `paths`, preserving their order.
pub fn render_qrc<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = String::from(PROLOGUE);
    for path in paths {
        // Infallible for String targets.
        let _ = writeln!(document, "        <file>{}</file>", path.as_ref());
    }
    document.push_str(EPILOGUE);
    document
}
