//! Configuration for the tsmock generator.
//!
//! Two files feed a generation request:
//!
//! - `tsmock.toml` holds [`Settings`] (where mocks go, how they are indented).
//!   It is owned by a [`ConfigStore`] that is reloaded explicitly when the host
//!   reports a change.
//! - `.tsmock/rules.toml` is the rules module: transformer rules for the
//!   rewriter, an optional header and the names that must stay unresolved.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod rules;
mod settings;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use rules::{RULES_PATH, Rules, RulesFile, Transformer, TransformerKind, Transformers};
pub use settings::{
    CONFIG_FILE, ConfigChange, ConfigStore, DEFAULT_MOCK_LOCATION, SETTINGS_SECTION, Settings,
};
