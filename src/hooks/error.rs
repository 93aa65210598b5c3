//! Engine error taxonomy
//!
//! Only two conditions abort a run before plugins execute: an unknown hook
//! name and a duplicate plugin registration. Anything a plugin itself raises
//! is captured as an `Error` verdict instead, never as an engine error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Unknown hook name passed to the engine; no plugins run
    #[error("unsupported hook '{0}'")]
    UnsupportedHook(String),

    /// Two plugins registered under the same name; fatal at startup
    #[error("duplicate plugin '{0}' registered")]
    DuplicatePlugin(String),
}
