use crate::model::Catalog;

/// Render a catalog as markdown: a `###` heading per category, one bullet
/// per builtin, then a blank separator line.
///
/// Labels and names are emitted verbatim, without escaping. A category
/// with no builtins still renders its heading and the blank line.
pub fn to_markdown(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in &catalog.categories {
        out.push_str(&format!("### {}\n", category.label));
        for name in &category.builtins {
            out.push_str(&format!("- `{}`\n", name));
        }
        out.push('\n');
    }
    out
}
