//! Source parsing
//!
//! One `SourceUnit` per input file: identifier, raw text and the
//! ast-grep parse tree. tree-sitter never refuses input outright, so a
//! "parse failure" here means the tree carries an error state; the
//! first error or missing node supplies the reported position.

use ast_grep_core::source::StrDoc;
use ast_grep_core::AstGrep;
use ast_grep_language::Python;
use tracing::debug;

use crate::errors::AnalyzerError;

/// The document type used throughout the analyzer.
pub type PyDoc = StrDoc<Python>;
/// A node in a parsed Python tree.
pub type PyNode<'t> = ast_grep_core::Node<'t, PyDoc>;

const SNIPPET_LIMIT: usize = 40;

/// A single parsed input file.
pub struct SourceUnit {
    path: String,
    text: String,
    tree: AstGrep<PyDoc>,
}

impl SourceUnit {
    /// Parse `text` into a source unit, rejecting malformed Python.
    pub fn parse(path: &str, text: &str) -> Result<Self, AnalyzerError> {
        let tree = AstGrep::new(text, Python);
        let unit = SourceUnit {
            path: path.to_string(),
            text: text.to_string(),
            tree,
        };

        if let Some((offset, snippet)) = unit.first_syntax_error() {
            let (line, column) = position_at(&unit.text, offset);
            debug!("Syntax error in {} at {}:{}", unit.path, line, column);
            return Err(AnalyzerError::Parse {
                path: unit.path,
                line,
                column,
                snippet,
            });
        }

        Ok(unit)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root of the parse tree (the module node).
    pub fn root(&self) -> PyNode<'_> {
        self.tree.root()
    }

    fn first_syntax_error(&self) -> Option<(usize, String)> {
        let root = self.root().get_ts_node();
        if !root.has_error() {
            return None;
        }

        // Error and missing nodes do not surface through the regular
        // child iterator; walk the raw tree-sitter nodes instead.
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                let start = node.start_byte() as usize;
                let end = node.end_byte() as usize;
                return Some((start, self.snippet_at(start, end)));
            }
            for index in (0..node.child_count()).rev() {
                if let Some(child) = node.child(index) {
                    stack.push(child);
                }
            }
        }

        // The root reports an error but no node below claims it.
        Some((0, self.snippet_at(0, self.text.len())))
    }

    fn snippet_at(&self, start: usize, end: usize) -> String {
        let start = start.min(self.text.len());
        let end = end.clamp(start, self.text.len());
        let mut piece = &self.text[start..end];
        // Missing nodes are zero-width; show the rest of the line.
        if piece.is_empty() {
            piece = &self.text[start..];
        }
        let first_line = piece.lines().next().unwrap_or_default();
        first_line.chars().take(SNIPPET_LIMIT).collect()
    }
}

/// Convert a byte offset into a 1-based (line, column) pair.
fn position_at(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let before = &text[..offset];
    let line = before.bytes().filter(|b| *b == b'\n').count() + 1;
    let column = offset - before.rfind('\n').map_or(0, |at| at + 1) + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use crate::errors::AnalyzerError;
    use crate::parse::*;

    #[test]
    fn test_well_formed_source_parses() {
        let unit = SourceUnit::parse("ok.py", "class Foo:\n    pass\n").unwrap();
        assert_eq!(unit.path(), "ok.py");
        assert_eq!(unit.root().kind().as_ref(), "module");
    }

    #[test]
    fn test_malformed_source_reports_position() {
        // tree-sitter recovers this input into a tree whose node kinds
        // all look ordinary; only the error state betrays it.
        match SourceUnit::parse("bad.py", "def broken(:\n    pass\n") {
            Err(AnalyzerError::Parse { path, line, .. }) => {
                assert_eq!(path, "bad.py");
                assert_eq!(line, 1);
            }
            Err(other) => panic!("expected parse error, got {other:?}"),
            Ok(_) => panic!("malformed source must not parse"),
        }
    }

    #[test]
    fn test_unclosed_call_is_rejected() {
        assert!(SourceUnit::parse("bad.py", "foo(\n").is_err());
    }

    #[test]
    fn test_empty_source_is_valid() {
        let unit = SourceUnit::parse("empty.py", "").unwrap();
        assert_eq!(unit.text(), "");
    }

    #[test]
    fn test_position_at_counts_lines_and_columns() {
        let text = "one\ntwo\nthree";
        assert_eq!(position_at(text, 0), (1, 1));
        assert_eq!(position_at(text, 4), (2, 1));
        assert_eq!(position_at(text, 9), (3, 2));
    }
}
