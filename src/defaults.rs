//! Built-in mappings every generated profile can carry.

use crate::models::{Action, FromEvent, FromModifiers, Manipulator, Modifier, Rule, SimpleMapping};

/// The rule that produces the hyper chord itself.
///
/// Holding caps lock emits left shift with the other three left modifiers,
/// which macOS applications see as the otherwise-unused ⌘⌃⌥⇧ combination.
/// Tapping caps lock alone emits escape.
#[must_use]
pub fn hyper_key_rule() -> Rule {
    Rule::new(
        "Hyper Key (⌘⌃⌥⇧)",
        vec![Manipulator::basic(
            FromEvent::key("caps_lock").with_modifiers(FromModifiers::optional_any()),
        )
        .with_description("Caps Lock -> Hyper Key")
        .with_to(vec![Action::key_with_modifiers(
            "left_shift",
            vec![
                Modifier::LeftCommand,
                Modifier::LeftControl,
                Modifier::LeftOption,
            ],
        )])
        .with_to_if_alone(vec![Action::key("escape")])],
    )
}

/// The default function-key row: media and system controls on F1-F12,
/// with F6 left as a plain F6.
#[must_use]
pub fn fn_function_keys() -> Vec<SimpleMapping> {
    vec![
        SimpleMapping::new("f1", vec![Action::consumer("display_brightness_decrement")]),
        SimpleMapping::new("f2", vec![Action::consumer("display_brightness_increment")]),
        SimpleMapping::new("f3", vec![Action::apple_vendor("mission_control")]),
        SimpleMapping::new("f4", vec![Action::apple_vendor("spotlight")]),
        SimpleMapping::new("f5", vec![Action::consumer("dictation")]),
        SimpleMapping::new("f6", vec![Action::key("f6")]),
        SimpleMapping::new("f7", vec![Action::consumer("rewind")]),
        SimpleMapping::new("f8", vec![Action::consumer("play_or_pause")]),
        SimpleMapping::new("f9", vec![Action::consumer("fast_forward")]),
        SimpleMapping::new("f10", vec![Action::consumer("mute")]),
        SimpleMapping::new("f11", vec![Action::consumer("volume_decrement")]),
        SimpleMapping::new("f12", vec![Action::consumer("volume_increment")]),
    ]
}
