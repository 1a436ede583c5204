//! Hyperlayer Library
//!
//! This library compiles a declarative description of hyper-key sublayers
//! (modal key groups activated by the ⌘⌃⌥⇧ chord) into Karabiner-Elements
//! complex-modification rules, and assembles them into a complete
//! karabiner.json profile.

// Module declarations
pub mod cli;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod export;
pub mod models;
