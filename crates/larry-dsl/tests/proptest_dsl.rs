use larry_core::pluralize;
use larry_core::types::{FieldOrigin, FieldProperty};
use larry_dsl::{parse, print};
use proptest::prelude::*;

/// Strategy for generating valid PascalCase entity names.
fn entity_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,10}"
}

/// Strategy for generating valid snake_case field names.
fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

/// Strategy for generating an opaque type tag.
fn type_tag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,9}"
}

fn relation_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("ho"), Just("hm"), Just("bt"), Just("hmb")]
}

fn property() -> impl Strategy<Value = FieldProperty> {
    prop::sample::select(FieldProperty::ALL.to_vec())
}

/// Strategy for whole sources: distinct entities whose relations only target
/// declared entities, each with a few distinct fields.
fn schema_source() -> impl Strategy<Value = String> {
    prop::collection::btree_set(entity_name(), 1..5)
        .prop_flat_map(|names| {
            let names: Vec<String> = names.into_iter().collect();
            let n = names.len();
            let blocks = prop::collection::vec(
                (
                    prop::collection::vec((0..n, relation_code()), 0..4),
                    prop::collection::btree_map(
                        field_name(),
                        (type_tag(), prop::collection::vec(property(), 0..3)),
                        0..4,
                    ),
                    any::<bool>(),
                ),
                n,
            );
            (Just(names), blocks)
        })
        .prop_map(|(names, blocks)| {
            let mut source = String::new();
            for (name, (relations, fields, timestamps)) in names.iter().zip(blocks) {
                source.push_str(name);
                for (target, code) in relations {
                    source.push_str(&format!(" {}:{code}", names[target]));
                }
                source.push('\n');
                for (field, (ty, properties)) in fields {
                    source.push_str(&format!("  {field}:{ty}"));
                    for property in properties {
                        source.push(':');
                        source.push_str(property.as_str());
                    }
                    source.push('\n');
                }
                if timestamps {
                    source.push_str("  timestamps\n");
                }
                source.push('\n');
            }
            source
        })
}

proptest! {
    /// An entity's table name depends on its name alone.
    #[test]
    fn table_name_is_pure(name in entity_name(), field in field_name(), ty in type_tag()) {
        let bare = parse(&format!("{name}\n")).unwrap();
        let with_field = parse(&format!("{name}\n  {field}:{ty}\n")).unwrap();
        let expected = pluralize(&name.to_lowercase());
        prop_assert_eq!(&bare.entities[0].table_name, &expected);
        prop_assert_eq!(&with_field.entities[0].table_name, &expected);
    }

    /// The type is the first comma piece after the name, params the rest.
    #[test]
    fn type_is_first_piece(
        field in field_name(),
        ty in type_tag(),
        params in prop::collection::vec("[0-9a-z ]{0,5}", 0..4),
        properties in prop::collection::vec(property(), 0..4),
    ) {
        let mut line = format!("  {field}:{ty}");
        for param in &params {
            line.push(',');
            line.push_str(param);
        }
        for property in &properties {
            line.push(':');
            line.push_str(property.as_str());
        }
        let schema = parse(&format!("E\n{line}\n")).unwrap();
        let parsed = &schema.entities[0].fields[0];
        prop_assert_eq!(&parsed.field_type, &ty);
        prop_assert!(!parsed.field_type.is_empty());

        // The definition is trimmed at the end, so only the last param loses
        // trailing whitespace when no property follows it.
        let mut expected = params.clone();
        if properties.is_empty() {
            if let Some(last) = expected.last_mut() {
                *last = last.trim_end().to_string();
            }
        }
        prop_assert_eq!(&parsed.params, &expected);
        for property in &properties {
            prop_assert!(parsed.has_property(*property));
        }
    }

    /// Validation rules come back trimmed and in order.
    #[test]
    fn validation_rules_in_order(rules in prop::collection::vec("[a-z][a-z:0-9]{0,8}", 1..5)) {
        let source = format!("E\n  f:string -> {}\n", rules.join(" | "));
        let schema = parse(&source).unwrap();
        prop_assert_eq!(&schema.entities[0].fields[0].validation_rules, &rules);
    }

    /// Parsing the same text twice yields the same graph.
    #[test]
    fn parse_is_idempotent(source in schema_source()) {
        let first = parse(&source);
        let second = parse(&source);
        prop_assert_eq!(first, second);
    }

    /// Generated sources always resolve, and reparse identically after printing.
    #[test]
    fn round_trip_property(source in schema_source()) {
        let schema = parse(&source);
        prop_assert!(schema.is_ok(), "Failed to parse:\n{source}\n{schema:?}");
        let schema = schema.unwrap();
        let printed = print(&schema);
        let reparsed = parse(&printed);
        prop_assert!(reparsed.is_ok(), "Re-parse failed for:\n{printed}");
        prop_assert_eq!(schema, reparsed.unwrap());
    }

    /// `A B:hm` then `B`: B gains exactly one `a_id` after its own fields.
    #[test]
    fn forward_reference_appends_column(
        fields in prop::collection::btree_set("f[a-z0-9]{0,8}", 0..5),
    ) {
        let mut source = String::from("A B:hm\nB\n");
        for field in &fields {
            source.push_str(&format!("  {field}:string\n"));
        }
        let schema = parse(&source).unwrap();
        let b = schema.entity("B").unwrap();
        prop_assert_eq!(b.fields.len(), fields.len() + 1);
        let last = b.fields.last().unwrap();
        prop_assert_eq!(last.name.as_str(), "a_id");
        prop_assert_eq!(last.field_type.as_str(), "integer");
        prop_assert_eq!(last.origin, FieldOrigin::ForeignKey);
        prop_assert_eq!(b.fields.iter().filter(|f| f.name.as_str() == "a_id").count(), 1);
    }

    /// Many declarations of the same foreign key add it once.
    #[test]
    fn foreign_keys_are_deduplicated(codes in prop::collection::vec(prop_oneof![Just("ho"), Just("hm")], 1..6)) {
        let mut source = String::new();
        for code in &codes {
            source.push_str(&format!("X T:{code}\n"));
        }
        source.push_str("T\n");
        let schema = parse(&source).unwrap();
        let t = schema.entity("T").unwrap();
        prop_assert_eq!(t.fields.len(), 1);
        prop_assert_eq!(t.fields[0].name.as_str(), "x_id");
    }

    /// `A B:hmb` yields one link table and no foreign-key column.
    #[test]
    fn many_to_many_link(a in entity_name(), b in entity_name()) {
        prop_assume!(a != b);
        let schema = parse(&format!("{a} {b}:hmb\n{b}\n")).unwrap();
        prop_assert_eq!(schema.links.len(), 1);
        let link = &schema.links[0];
        let (la, lb) = (a.to_lowercase(), b.to_lowercase());
        prop_assert_eq!(&link.table_name, &format!("{lb}_{la}"));
        prop_assert_eq!(link.fields[0].name.as_str(), format!("{la}_id"));
        prop_assert_eq!(link.fields[1].name.as_str(), format!("{lb}_id"));
        prop_assert!(schema.entity(&b).unwrap().fields.is_empty());
        prop_assert_eq!(schema.entity(&a).unwrap().has_many_and_belongs_to[0].as_str(), b.as_str());
    }

    /// Parsing should never panic on arbitrary input.
    #[test]
    fn parse_never_panics(input in "\\PC{0,200}") {
        let _ = parse(&input);
    }

    /// Parsing should never panic on inputs built from DSL punctuation.
    #[test]
    fn parse_never_panics_on_dsl_shapes(input in "[ \\tA-Za-z_:,|>\\-\\r\\n]{0,200}") {
        if let Err(err) = parse(&input) {
            prop_assert!(err.line() >= 1);
            prop_assert!(err.span().end <= input.len());
        }
    }
}
