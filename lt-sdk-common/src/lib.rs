//! Shared pieces behind the `lt-sdk` service clients.
//!
//! A service client describes each of its operations with a static
//! [`request::Operation`], checks the caller's parameters with
//! [`params::missing_params`], turns them into a [`request::RequestDescriptor`]
//! with [`request::build_request`] and hands that to a [`transport::Transport`].
//! Authentication, network I/O and HTTP status handling all live behind the
//! transport.

pub mod auth;
pub mod error;
pub mod helper;
pub mod params;
pub mod request;
pub mod transport;

pub use error::Error;
