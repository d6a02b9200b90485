//! UI Components for the image classifier application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the accepted formats
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadWidget`] - Image selection, upload and preview
//! - [`ResultsTable`] - Echoed image name and classification table

mod header;
mod hero;
mod upload;
mod results;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use results::*;
pub use footer::*;
