//! Core components of the `mars-photos-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`RoverClient`] and its builder.
//! - The primary [`RoverError`] type.
//! - [`EarthDate`], the API's calendar day.

/// The main client (`RoverClient`), builder, and configuration.
pub mod client;
/// Calendar dates in the API's `Y-M-D` wire form.
pub mod date;
/// The primary error type (`RoverError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::RoverClient`
pub use client::{ClientOption, RoverClient, RoverClientBuilder};
pub use date::EarthDate;
pub use error::RoverError;
