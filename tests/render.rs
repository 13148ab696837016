use builtindoc::extract::scan;
use builtindoc::model::{Catalog, Category};
use builtindoc::render::to_markdown;

#[test]
fn renders_scenario_exactly() {
    let src = r#"void lex_add_builtins(Env *e) {
  /* Math */
  lex_add_builtin(e, "add", fn1);
  lex_add_builtin(e, "sub", fn2);
  /* String */
  lex_add_builtin(e, "concat", fn3);
}
"#;
    let expected = "### Math\n- `add`\n- `sub`\n\n### String\n- `concat`\n\n";
    assert_eq!(to_markdown(&scan(src)), expected);
}

#[test]
fn empty_catalog_renders_empty_string() {
    assert_eq!(to_markdown(&Catalog::default()), "");
}

#[test]
fn empty_category_renders_heading_and_blank_line() {
    let catalog = Catalog {
        categories: vec![Category::new("Reserved")],
    };
    assert_eq!(to_markdown(&catalog), "### Reserved\n\n");
}

#[test]
fn heading_count_matches_category_count() {
    let src = r#"void lex_add_builtins(Env *e) {
  /* A */
  lex_add_builtin(e, "a", fn);
  /* B */
  /* C */
  lex_add_builtin(e, "c", fn);
}
"#;
    let catalog = scan(src);
    let md = to_markdown(&catalog);
    let headings = md.lines().filter(|l| l.starts_with("### ")).count();
    assert_eq!(headings, catalog.categories.len());
    assert_eq!(headings, 3);
}

#[test]
fn labels_and_names_are_not_escaped() {
    let catalog = Catalog {
        categories: vec![Category {
            label: "Bit & Byte *ops*".into(),
            builtins: vec!["shift<<".into()],
        }],
    };
    assert_eq!(to_markdown(&catalog), "### Bit & Byte *ops*\n- `shift<<`\n\n");
}

#[test]
fn pipeline_is_idempotent() {
    let src = r#"void lex_add_builtins(Env *e) {
  /* Math */
  lex_add_builtin(e, "add", fn1);
}
"#;
    let first = to_markdown(&scan(src));
    let second = to_markdown(&scan(src));
    assert_eq!(first, second);
}
