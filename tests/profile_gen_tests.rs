//! Integration tests for the definition-to-profile pipeline.
//!
//! Tests the complete flow:
//! 1. Parsing a TOML definition into the layer tree
//! 2. Compiling layers into rules (toggle, exclusion, dispatch)
//! 3. Assembling and serializing the karabiner.json document

use hyperlayer::config::Definition;
use hyperlayer::export::DocumentBuilder;
use hyperlayer::models::layer::CommandMap;
use hyperlayer::models::{
    Action, Command, Condition, FromModifiers, HyperLayers, KeyCode, KeyTranslation,
};
use hyperlayer::compiler::RuleCompiler;

mod fixtures;
use fixtures::BASIC_DEFINITION;

#[test]
fn test_full_pipeline_from_toml() {
    let definition = Definition::from_toml_str(BASIC_DEFINITION).unwrap();
    let document = DocumentBuilder::new(&definition).build();
    let profile = &document.profiles[0];

    assert_eq!(profile.name, "Test");
    assert!(profile.selected);

    // Hyper key rule + three top-level bindings.
    let rules = &profile.complex_modifications.rules;
    assert_eq!(rules.len(), 4);
    assert_eq!(rules[0].description, "Hyper Key (⌘⌃⌥⇧)");
    assert_eq!(rules[1].description, "Hyper Key sublayer \"o\"");
    assert_eq!(rules[2].description, "Hyper Key sublayer \"m\"");
    assert_eq!(rules[3].description, "Hyper Key + f6");

    // Sublayer "o": toggle first, then its two commands in file order.
    let o_rules = &rules[1].manipulators;
    assert_eq!(o_rules.len(), 3);
    assert_eq!(
        o_rules[0].conditions,
        vec![Condition::variable_if("hyper_sublayer_m", 0)]
    );
    assert_eq!(o_rules[1].to, vec![Action::shell("open -a 'Google Chrome.app'")]);
    assert_eq!(o_rules[2].to, vec![Action::shell("open -a 'Finder.app'")]);

    // Sublayer "m" excludes "o" in return.
    assert_eq!(
        rules[2].manipulators[0].conditions,
        vec![Condition::variable_if("hyper_sublayer_o", 0)]
    );

    // The direct binding has no conditions and no variable.
    assert!(rules[3].manipulators[0].conditions.is_empty());
    assert_eq!(
        definition.layers.sublayer_variable_names(),
        vec!["hyper_sublayer_o", "hyper_sublayer_m"]
    );

    assert_eq!(profile.fn_function_keys.len(), 12);
}

#[test]
fn test_single_sublayer_scenario() {
    // { o: { g: open Chrome } } compiles to one group with two manipulators.
    let mut commands = CommandMap::new();
    commands.insert(KeyCode::from("g"), Command::app("Google Chrome"));
    let layers = HyperLayers::new().with_sublayer("o", commands);

    let translation = KeyTranslation::identity();
    let rules = RuleCompiler::new(&translation).compile(&layers);

    assert_eq!(rules.len(), 1);
    let manipulators = &rules[0].manipulators;
    assert_eq!(manipulators.len(), 2);

    // Only one sublayer exists, so the toggle has nothing to exclude.
    let toggle = &manipulators[0];
    assert!(toggle.conditions.is_empty());
    assert_eq!(toggle.to, vec![Action::set_variable("hyper_sublayer_o", 1)]);
    assert_eq!(
        toggle.to_after_key_up,
        vec![Action::set_variable("hyper_sublayer_o", 0)]
    );
    assert_eq!(
        toggle.from.modifiers.as_ref().unwrap(),
        &FromModifiers::hyper()
    );

    let dispatch = &manipulators[1];
    assert_eq!(dispatch.from.key_code, KeyCode::from("g"));
    assert_eq!(
        dispatch.conditions,
        vec![Condition::variable_if("hyper_sublayer_o", 1)]
    );
    assert_eq!(dispatch.to, vec![Action::shell("open -a 'Google Chrome.app'")]);
}

#[test]
fn test_leaf_only_definition_creates_no_variables() {
    let layers = HyperLayers::new().with_command("f6", Command::new(vec![Action::key("f6")]));

    let translation = KeyTranslation::identity();
    let rules = RuleCompiler::new(&translation).compile(&layers);

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].manipulators.len(), 1);
    assert!(rules[0].manipulators[0].conditions.is_empty());
    assert!(layers.sublayer_variable_names().is_empty());
}

#[test]
fn test_compiling_twice_is_idempotent() {
    let definition = Definition::from_toml_str(BASIC_DEFINITION).unwrap();
    let first = DocumentBuilder::new(&definition).build();
    let second = DocumentBuilder::new(&definition).build();
    assert_eq!(first, second);
    assert_eq!(
        first.to_json_string().unwrap(),
        second.to_json_string().unwrap()
    );
}

#[test]
fn test_serialized_document_matches_karabiner_shapes() {
    let definition = Definition::from_toml_str(BASIC_DEFINITION).unwrap();
    let document = DocumentBuilder::new(&definition).build();
    let value: serde_json::Value =
        serde_json::from_str(&document.to_json_string().unwrap()).unwrap();

    let toggle = &value["profiles"][0]["complex_modifications"]["rules"][1]["manipulators"][0];
    assert_eq!(toggle["type"], "basic");
    assert_eq!(toggle["from"]["key_code"], "o");
    assert_eq!(
        toggle["from"]["modifiers"]["mandatory"],
        serde_json::json!(["left_command", "left_control", "left_shift", "left_option"])
    );
    assert_eq!(toggle["to"][0]["set_variable"]["value"], 1);
    assert_eq!(toggle["to_after_key_up"][0]["set_variable"]["value"], 0);
    assert_eq!(toggle["conditions"][0]["type"], "variable_if");

    let dispatch = &value["profiles"][0]["complex_modifications"]["rules"][1]["manipulators"][1];
    assert_eq!(dispatch["from"]["modifiers"]["mandatory"], serde_json::json!(["any"]));
    assert_eq!(dispatch["conditions"][0]["name"], "hyper_sublayer_o");
    assert_eq!(dispatch["conditions"][0]["value"], 1);

    let fn_keys = &value["profiles"][0]["fn_function_keys"];
    assert_eq!(fn_keys[0]["from"]["key_code"], "f1");
    assert_eq!(
        fn_keys[0]["to"][0]["consumer_key_code"],
        "display_brightness_decrement"
    );
}
