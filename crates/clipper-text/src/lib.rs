//! # clipper-text
//!
//! UTF-8 safe clipping and splitting of chat messages.
//!
//! Every routine here is a pure function. Callers resolve the clipping
//! [`Marker`](clipper_core::Marker) up front; a budget that cannot hold the
//! marker is rejected with [`ClipperError::Budget`](clipper_core::ClipperError).

pub mod boundary;
pub mod clip;
pub mod fragment;
pub mod lines;
pub mod newlines;
pub mod segment;


pub use boundary::{back_up_to_boundary, is_boundary};
pub use clip::clip;
pub use fragment::fragment;
pub use lines::split_lines;
pub use newlines::collapse_newlines;
pub use segment::segment;
