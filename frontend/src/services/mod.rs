//! Server communication.
//!
//! # Services
//!
//! - [`upload`] - Image upload to the classification endpoint

pub mod upload;

pub use upload::*;
