//! UI Components for the FishScan application.
//!
//! # Layout Components
//! - [`Header`] - App bar with species link and service status
//!
//! # Feature Components
//! - [`UploadWidget`] - Image selection, preview and prediction
//! - [`DropZone`] - Drag & drop / click-to-pick image picker
//! - [`ResultTable`] - Predicted label, confidence and solution

mod header;
mod dropzone;
mod upload;
mod result;

pub use header::*;
pub use dropzone::*;
pub use upload::*;
pub use result::*;
