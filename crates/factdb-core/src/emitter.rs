//! S-expression emitter
//!
//! Renders a [`Database`] as `(define ...)` forms for the downstream
//! interpreter:
//!
//! ```text
//! (define entities (list "austin" "texas" ))
//! (define austin:c "austin")
//! (define city:<c,t>-dictionary (make-dictionary "austin" ))
//! (define city:<c,t> (x) (dictionary-contains x city:<c,t>-dictionary))
//! (define population:<lo,i>-dictionary (make-dictionary "austin" ))
//! (define population:<lo,i>-array (array 345496))
//! (define population:<lo,i> (x) (array-get-ith-element population:<lo,i>-array (dictionary-lookup x population:<lo,i>-dictionary)))
//! (define loc:<lo,<lo,t>>-dictionary (make-dictionary (cons "austin" "texas" ) ))
//! (define loc:<lo,<lo,t>> (x y) (dictionary-contains (cons x y) loc:<lo,<lo,t>>-dictionary))
//! ```
//!
//! Values that parse as numbers are written bare, everything else is quoted.

use crate::constants::output::{ARRAY_SUFFIX, DICTIONARY_SUFFIX, ENTITIES};
use crate::database::{CategoryTable, Database, RelationTable};
use std::borrow::Cow;
use std::collections::HashSet;
use std::io;

/// Render a value as an s-expression atom
pub fn render_atom(value: &str) -> Cow<'_, str> {
    if value.parse::<f64>().is_ok() {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("\"{value}\""))
    }
}

/// Identifier of the constant bound to an entity, e.g. `new_york:c`
pub fn entity_id(value: &str, type_tag: &str) -> String {
    format!("{}:{type_tag}", value.replace(' ', "_"))
}

fn atom_list<'v>(values: impl IntoIterator<Item = &'v str>) -> String {
    values.into_iter().map(render_atom).collect::<Vec<_>>().join(" ")
}

fn cons_list<'v>(pairs: impl IntoIterator<Item = (&'v str, &'v str)>) -> String {
    pairs
        .into_iter()
        .map(|(left, right)| format!("(cons {} {} )", render_atom(left), render_atom(right)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole database
pub fn render_database(db: &Database) -> String {
    let mut out = String::new();
    push_form(
        &mut out,
        format!(
            "(define {ENTITIES} (list {} ))",
            atom_list(db.entities.iter().map(String::as_str))
        ),
    );

    let mut defined: HashSet<String> = HashSet::new();
    for table in &db.categories {
        push_category(table, &mut defined, &mut out);
    }
    for table in &db.relations {
        push_relation(table, &mut out);
    }
    out
}

/// Write the whole database to `writer`
pub fn write_database<W: io::Write>(db: &Database, writer: &mut W) -> io::Result<()> {
    writer.write_all(render_database(db).as_bytes())?;
    writer.flush()
}

fn push_form(out: &mut String, form: String) {
    out.push_str(&form);
    out.push('\n');
}

fn push_category(table: &CategoryTable, defined: &mut HashSet<String>, out: &mut String) {
    let name = &table.name;

    for tag in &table.type_tags {
        for value in &table.values {
            let id = entity_id(value, tag);
            if defined.insert(id.clone()) {
                push_form(out, format!("(define {id} \"{value}\")"));
            }
        }
    }

    push_form(
        out,
        format!(
            "(define {name}{DICTIONARY_SUFFIX} (make-dictionary {} ))",
            atom_list(table.values.iter().map(String::as_str))
        ),
    );
    push_form(out, format!("(define {name} (x) (dictionary-contains x {name}{DICTIONARY_SUFFIX}))"));
}

fn push_relation(table: &RelationTable, out: &mut String) {
    match table {
        RelationTable::Functional { name, entries } => {
            push_form(
                out,
                format!(
                    "(define {name}{DICTIONARY_SUFFIX} (make-dictionary {} ))",
                    atom_list(entries.keys().map(String::as_str))
                ),
            );
            push_form(
                out,
                format!(
                    "(define {name}{ARRAY_SUFFIX} (array {}))",
                    atom_list(entries.values().map(String::as_str))
                ),
            );
            push_form(
                out,
                format!(
                    "(define {name} (x) (array-get-ith-element {name}{ARRAY_SUFFIX} (dictionary-lookup x {name}{DICTIONARY_SUFFIX})))"
                ),
            );
        }
        RelationTable::SetValued { name, pairs } => {
            push_form(
                out,
                format!(
                    "(define {name}{DICTIONARY_SUFFIX} (make-dictionary {} ))",
                    cons_list(pairs.iter().map(|(l, r)| (l.as_str(), r.as_str())))
                ),
            );
            push_form(
                out,
                format!(
                    "(define {name} (x y) (dictionary-contains (cons x y) {name}{DICTIONARY_SUFFIX}))"
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_atom_quotes_non_numbers() {
        assert_eq!(render_atom("austin"), "\"austin\"");
        assert_eq!(render_atom("345496"), "345496");
        assert_eq!(render_atom("-3.5"), "-3.5");
        assert_eq!(render_atom("1e3"), "1e3");
        assert_eq!(render_atom(""), "\"\"");
    }

    #[test]
    fn test_entity_id_replaces_spaces() {
        assert_eq!(entity_id("new york", "c"), "new_york:c");
        assert_eq!(entity_id("texas", "s"), "texas:s");
    }

    #[test]
    fn test_render_small_database() {
        let db = Database {
            entities: BTreeSet::from(["new york".to_string()]),
            categories: vec![CategoryTable {
                name: "city:<c,t>".to_string(),
                type_tags: strings(&["c"]),
                values: strings(&["new york"]),
            }],
            relations: vec![
                RelationTable::functional(
                    "population:<lo,i>",
                    vec![("new york".to_string(), "8000000".to_string())],
                ),
                RelationTable::set_valued(
                    "loc:<lo,<lo,t>>",
                    vec![("new york".to_string(), "ny".to_string())],
                ),
            ],
        };

        let expected = "\
(define entities (list \"new york\" ))
(define new_york:c \"new york\")
(define city:<c,t>-dictionary (make-dictionary \"new york\" ))
(define city:<c,t> (x) (dictionary-contains x city:<c,t>-dictionary))
(define population:<lo,i>-dictionary (make-dictionary \"new york\" ))
(define population:<lo,i>-array (array 8000000))
(define population:<lo,i> (x) (array-get-ith-element population:<lo,i>-array (dictionary-lookup x population:<lo,i>-dictionary)))
(define loc:<lo,<lo,t>>-dictionary (make-dictionary (cons \"new york\" \"ny\" ) ))
(define loc:<lo,<lo,t>> (x y) (dictionary-contains (cons x y) loc:<lo,<lo,t>>-dictionary))
";
        assert_eq!(render_database(&db), expected);
    }

    #[test]
    fn test_empty_tables_render_empty_lists() {
        let db = Database {
            entities: BTreeSet::new(),
            categories: vec![CategoryTable {
                name: "lake:<l,t>".to_string(),
                type_tags: strings(&["l"]),
                values: Vec::new(),
            }],
            relations: vec![RelationTable::set_valued("loc", Vec::new())],
        };
        let rendered = render_database(&db);
        assert!(rendered.starts_with("(define entities (list  ))\n"));
        assert!(rendered.contains("(define lake:<l,t>-dictionary (make-dictionary  ))\n"));
        assert!(rendered.contains("(define loc-dictionary (make-dictionary  ))\n"));
    }

    #[test]
    fn test_constants_defined_once() {
        let db = Database {
            entities: BTreeSet::from(["austin".to_string()]),
            categories: vec![
                CategoryTable {
                    name: "city:<c,t>".to_string(),
                    type_tags: strings(&["c"]),
                    values: strings(&["austin", "austin"]),
                },
                CategoryTable {
                    name: "capital:<c,t>".to_string(),
                    type_tags: strings(&["c"]),
                    values: strings(&["austin"]),
                },
            ],
            relations: Vec::new(),
        };
        let rendered = render_database(&db);
        assert_eq!(rendered.matches("(define austin:c ").count(), 1);
        assert!(rendered.contains("(make-dictionary \"austin\" \"austin\" ))"));
    }

    #[test]
    fn test_write_database_matches_render() {
        let db = Database::default();
        let mut buffer = Vec::new();
        write_database(&db, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), render_database(&db));
    }
}
