//! Compilation of a single sublayer into its manipulators.

use crate::models::layer::{sublayer_variable_name, CommandMap};
use crate::models::{Action, Condition, FromEvent, FromModifiers, KeyCode, KeyTranslation, Manipulator};

/// Compiles one sublayer into `1 + commands.len()` manipulators.
///
/// The first manipulator is the toggle: pressing the hyper chord plus the
/// trigger key sets the sublayer's variable to 1, releasing the trigger sets
/// it back to 0. Its conditions require every *other* sublayer variable to
/// be 0, so a sublayer can never activate while a sibling is held.
/// `all_variables` must therefore cover the entire layer set, including
/// sublayers compiled after this one.
///
/// The remaining manipulators dispatch the commands in declaration order.
/// Each matches its key under any modifier combination (the chord already
/// gated entry through the variable) and fires only while this sublayer's
/// variable is 1.
///
/// An empty command map yields just the toggle: such a sublayer is legal
/// but inert.
#[must_use]
pub fn compile_sublayer(
    trigger: &KeyCode,
    commands: &CommandMap,
    all_variables: &[String],
    translation: &KeyTranslation,
) -> Vec<Manipulator> {
    let variable = sublayer_variable_name(trigger);

    let exclusions: Vec<Condition> = all_variables
        .iter()
        .filter(|name| **name != variable)
        .map(|name| Condition::variable_if(name.clone(), 0))
        .collect();

    let mut manipulators = Vec::with_capacity(commands.len() + 1);

    manipulators.push(
        Manipulator::basic(
            FromEvent::key(translation.translate(trigger)).with_modifiers(FromModifiers::hyper()),
        )
        .with_description(format!("Toggle Hyper sublayer {trigger}"))
        .with_to(vec![Action::set_variable(variable.clone(), 1)])
        .with_to_after_key_up(vec![Action::set_variable(variable.clone(), 0)])
        .with_conditions(exclusions),
    );

    for (key, command) in commands {
        let mut manipulator = Manipulator::basic(
            FromEvent::key(translation.translate(key)).with_modifiers(FromModifiers::any()),
        )
        .with_to(command.to.clone())
        .with_conditions(vec![Condition::variable_if(variable.clone(), 1)]);
        if let Some(description) = &command.description {
            manipulator = manipulator.with_description(description.clone());
        }
        manipulators.push(manipulator);
    }

    manipulators
}
