//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the binary name and profile defaults.

/// The binary name of the application (used for the clap command name and
/// in command examples).
pub const APP_BINARY_NAME: &str = "hyperlayer";

/// Name of the profile written when the definition file does not set one.
pub const DEFAULT_PROFILE_NAME: &str = "Default";
