//! Compilation of hyper-key layers into Karabiner rules.
//!
//! Compilation is a pure, single-pass function over the in-memory layer
//! tree: it always succeeds, holds no state, and produces the same output
//! for the same input. The mutual-exclusion guarantee (at most one sublayer
//! active at a time) is established here by construction, through the
//! conditions placed on each toggle manipulator; nothing is checked at
//! runtime.

pub mod sublayer;
pub mod validate;

use crate::models::{
    Command, FromEvent, FromModifiers, HyperLayers, KeyCode, KeyTranslation, Manipulator, Rule,
    SublayerSpec,
};

pub use sublayer::compile_sublayer;
pub use validate::{LayerValidator, ValidationReport, ValidationWarning};

/// Compiles a layer set into `complex_modifications` rule groups.
pub struct RuleCompiler<'a> {
    translation: &'a KeyTranslation,
}

impl<'a> RuleCompiler<'a> {
    /// Creates a compiler that passes trigger keys through the given
    /// translation table.
    #[must_use]
    pub fn new(translation: &'a KeyTranslation) -> Self {
        Self { translation }
    }

    /// Compiles every binding, in declaration order, into one rule group
    /// per trigger key.
    ///
    /// The full set of sublayer variable names is derived up front: each
    /// toggle manipulator must exclude every sibling sublayer, including
    /// ones that appear later in the file.
    #[must_use]
    pub fn compile(&self, layers: &HyperLayers) -> Vec<Rule> {
        let all_variables = layers.sublayer_variable_names();

        layers
            .iter()
            .map(|(trigger, spec)| match spec {
                SublayerSpec::Command(command) => self.compile_direct(trigger, command),
                SublayerSpec::Sublayer(commands) => Rule::new(
                    format!("Hyper Key sublayer \"{trigger}\""),
                    sublayer::compile_sublayer(trigger, commands, &all_variables, self.translation),
                ),
            })
            .collect()
    }

    /// A trigger bound directly to a command: one unconditional manipulator
    /// on the hyper chord, no sublayer variable involved.
    fn compile_direct(&self, trigger: &KeyCode, command: &Command) -> Rule {
        let physical = self.translation.translate(trigger);
        let mut manipulator = Manipulator::basic(
            FromEvent::key(physical.clone()).with_modifiers(FromModifiers::hyper()),
        )
        .with_to(command.to.clone());
        if let Some(description) = &command.description {
            manipulator = manipulator.with_description(description.clone());
        }
        Rule::new(format!("Hyper Key + {physical}"), vec![manipulator])
    }
}
