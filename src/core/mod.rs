//! Core components of the `idx-alert` crate.
//!
//! This module contains the foundational building blocks:
//! - The [`IdxClient`] and its builder.
//! - The primary [`IdxError`] type.
//! - Internal networking helpers.

/// The feed client (`IdxClient`) and its builder.
pub mod client;
/// The primary error type (`IdxError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IdxClient`
pub use client::{IdxClient, IdxClientBuilder};
pub use error::IdxError;
