//! # clipper-core
//!
//! Core types, configuration, and error handling for clipper.

pub mod config;
pub mod error;
pub mod limits;
pub mod marker;

pub use error::ClipperError;
pub use limits::{FragmentMode, Limits};
pub use marker::Marker;
