use crate::model::Catalog;
use anyhow::{Context, Result};
use camino::Utf8Path;
use regex::Regex;
use std::sync::LazyLock;

/// Substring identifying the line where the registration routine starts.
const ROUTINE_MARKER: &str = "void lex_add_builtins";

/// A block comment that is the only thing on its line, e.g. `/* Math */`.
static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/\*\s*(.*?)\s*\*/\s*$").unwrap());

/// A registration call up to its quoted second argument, e.g.
/// `lex_add_builtin(e, "car", builtin_car);`. Anything after the closing
/// quote, including trailing comments, is outside the match.
static BUILTIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"lex_add_builtin\([^,]+,\s*"([^"]+)""#).unwrap());

/// Scan source text for the builtins registration routine and collect the
/// categories and builtin names registered inside it.
///
/// This is a single forward pass over lines, matching patterns over raw
/// text rather than parsing C. It never fails: a missing marker or a
/// malformed call degrades to an empty or partial catalog.
pub fn scan(text: &str) -> Catalog {
    let mut catalog = Catalog::default();
    let mut inside = false;

    for line in text.lines() {
        let stripped = line.trim();

        if !inside {
            if stripped.contains(ROUTINE_MARKER) {
                inside = true;
            }
            continue;
        }

        // The first line starting with a closing brace ends the scan.
        // Braces are not counted; the registration routine body is flat.
        if stripped.starts_with('}') {
            break;
        }

        if let Some(cap) = CATEGORY_RE.captures(stripped) {
            catalog.open_category(&cap[1]);
        } else if let Some(cap) = BUILTIN_RE.captures(stripped) {
            catalog.push_builtin(&cap[1]);
        }
    }

    catalog
}

/// Read `path` and scan its contents.
pub fn scan_file(path: &Utf8Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path.as_str())
        .with_context(|| format!("Failed to read {}", path))?;
    Ok(scan(&text))
}
