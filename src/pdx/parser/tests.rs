use crate::pdx::ast::{Entity, EntityKind};
use crate::pdx::parser::{parse, parse_settings, parse_with, Dialect};
use crate::pdx::testing::assert_entities;

#[test]
fn test_block_with_one_property() {
    let entities = parse("foo = { bar = 1 }").expect("Failed to parse");

    assert_entities(&entities).count(1).entity(0, |entity| {
        entity
            .assert_block()
            .name("foo")
            .property_count(1)
            .property("bar", "1")
            .child_count(0);
    });
}

#[test]
fn test_flat_quoted_body_is_an_enumeration() {
    let entities = parse_settings("foo = { \"a\" \"b\" \"c\" }").expect("Failed to parse");

    assert_entities(&entities).count(1).entity(0, |entity| {
        entity
            .assert_enumeration()
            .name("foo")
            .values(&["a", "b", "c"]);
    });
}

#[test]
fn test_duplicate_property_last_write_wins() {
    let entities = parse("foo = { bar = 1 bar = 2 }").expect("Failed to parse");

    assert_entities(&entities).count(1).entity(0, |entity| {
        entity
            .assert_block()
            .property_count(1)
            .property("bar", "2");
    });
}

#[test]
fn test_variable() {
    let entities = parse("@x = 5").expect("Failed to parse");

    assert_entities(&entities).count(1).entity(0, |entity| {
        entity.assert_variable().name("x").value("5");
    });
}

#[test]
fn test_namespace_then_empty_block() {
    let entities = parse("namespace = ns foo = { }").expect("Failed to parse");

    assert_entities(&entities)
        .count(2)
        .entity(0, |entity| {
            entity.assert_namespace().name("ns");
        })
        .entity(1, |entity| {
            entity
                .assert_block()
                .name("foo")
                .property_count(0)
                .child_count(0);
        });
}

#[test]
fn test_missing_value_is_an_error() {
    let err = parse("foo = { bar = }").unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 15);
    assert_eq!(err.found.as_deref(), Some("'}'"));
}

#[test]
fn test_top_level_property_depends_on_dialect() {
    assert!(parse_settings("bar = 1").is_ok());
    assert!(parse("bar = 1").is_err());
}

#[test]
fn test_top_level_enumeration_only_in_settings() {
    let entities = parse_settings("last_mods = { \"mod/ugc_1.mod\" \"mod/ugc_2.mod\" }").unwrap();
    assert_eq!(entities[0].kind(), EntityKind::Enumeration);
    // script has no top-level enumeration and a block body cannot hold bare words
    assert!(parse("last_mods = { a b }").is_err());
}

#[test]
fn test_empty_and_comment_only_input() {
    assert_eq!(parse("").unwrap(), Vec::<Entity>::new());
    assert_eq!(parse_settings("# nothing here\n\n").unwrap(), Vec::<Entity>::new());
}

#[test]
fn test_nested_blocks_and_includes() {
    let source = r#"
building_farm = {
    base_buildtime = 360
    potential = {
        owner = { is_primitive = no }
    }
    allow = { always = yes }
    potential = {
        owner = { is_primitive = yes }
    }
}
"#;
    let entities = parse(source).expect("Failed to parse");

    assert_entities(&entities).count(1).entity(0, |entity| {
        entity
            .assert_block()
            .name("building_farm")
            .property("base_buildtime", "360")
            .child_count(3)
            .child(0, |potential| {
                potential.name("potential").child(0, |owner| {
                    owner.property("is_primitive", "no");
                });
            })
            .child(1, |allow| {
                allow.name("allow").property("always", "yes");
            })
            .include("potential", |potential| {
                potential.include("owner", |owner| {
                    owner.property("is_primitive", "yes");
                });
            });
    });
}

#[test]
fn test_enumeration_inside_block_becomes_list_property() {
    let entities = parse("tech = { prerequisites = { tech_a \"tech_b\" } tier = 1 }").unwrap();

    assert_entities(&entities).entity(0, |entity| {
        entity
            .assert_block()
            .list("prerequisites", &["tech_a", "tech_b"])
            .property("tier", "1")
            .child_count(0);
    });
}

#[test]
fn test_relational_operators_are_dropped() {
    let entities = parse("trigger = { num_owned_planets > 10 years_passed <= 5 }").unwrap();

    assert_entities(&entities).entity(0, |entity| {
        entity
            .assert_block()
            .property("num_owned_planets", "10")
            .property("years_passed", "5");
    });
}

#[test]
fn test_variable_reference_keeps_sigil() {
    let entities = parse("@cost = 10\nbuilding = { cost = @cost }").unwrap();

    assert_entities(&entities).count(2).entity(1, |entity| {
        entity.assert_block().property("cost", "@cost");
    });
}

#[test]
fn test_quoted_values_and_block_names() {
    let entities = parse_settings("name = \"My Mod\"\n\"block name\" = { path = \"a/b c\" }").unwrap();

    assert_entities(&entities)
        .count(2)
        .entity(0, |entity| {
            entity.assert_property().name("name").value("My Mod");
        })
        .entity(1, |entity| {
            entity
                .assert_block()
                .name("block name")
                .property("path", "a/b c");
        });
}

#[test]
fn test_namespace_must_come_first() {
    assert!(parse("foo = { } namespace = ns").is_err());
    assert!(parse("namespace = ns namespace = other").is_err());
}

#[test]
fn test_numeric_namespace() {
    let entities = parse("namespace = 123 foo = { }").unwrap();
    assert_entities(&entities)
        .count(2)
        .entity(0, |entity| {
            entity.assert_namespace().name("123");
        })
        .entity(1, |entity| {
            entity.assert_block().name("foo");
        });
}

#[test]
fn test_namespace_is_a_property_in_settings() {
    let entities = parse_settings("namespace = ns").unwrap();
    assert_entities(&entities).entity(0, |entity| {
        entity.assert_property().name("namespace").value("ns");
    });
}

#[test]
fn test_block_named_namespace_in_script() {
    let entities = parse("namespace = { a = 1 }").unwrap();
    assert_entities(&entities).count(1).entity(0, |entity| {
        entity.assert_block().name("namespace").property("a", "1");
    });
}

#[test]
fn test_trailing_garbage_is_rejected() {
    let err = parse("foo = { } }").unwrap_err();
    assert_eq!(err.column, 11);
    assert!(parse_settings("a = 1 b").is_err());
}

#[test]
fn test_unclosed_block_reports_end_of_input() {
    let err = parse("foo = { bar = 1").unwrap_err();
    assert_eq!(err.found, None);
    assert_eq!(err.offset, 15);
}

#[test]
fn test_lexical_error_location() {
    let err = parse_settings("a = 1\nb = $").unwrap_err();
    assert_eq!((err.line, err.column), (2, 5));
    assert!(err.message.contains("unexpected character"));
}

#[test]
fn test_variable_requires_number() {
    assert!(parse("@x = abc").is_err());
    assert!(parse("@x > 5").is_err());
}

#[test]
fn test_parse_with_matches_entry_points() {
    let source = "@a = 1 b = { c = d }";
    assert_eq!(parse_with(source, Dialect::Script), parse(source));
    assert_eq!(parse_with(source, Dialect::Settings), parse_settings(source));
}

#[test]
fn test_script_is_accepted_by_settings() {
    let source = "@a = 1\nb = { c = d e = { f g } }";
    assert_eq!(parse(source).unwrap(), parse_settings(source).unwrap());
}
