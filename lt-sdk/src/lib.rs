//! Client for the Language Translator v3 REST API.
//!
//! - [`translator`]: text translation, language identification, custom models
//!   and document translation.
//!
//! Transport and authentication come from [`lt_sdk_common`]; any
//! [`lt_sdk_common::transport::Transport`] implementation can be plugged in.

#[cfg(feature = "translator")]
pub mod translator;

pub use lt_sdk_common;
