//! Browser and backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`inference`] - Image upload to the prediction endpoint, health probe
//! - [`preview`] - Object URLs for the image preview
//! - [`navigation`] - Companion page in a new tab

pub mod inference;
pub mod preview;
pub mod navigation;

pub use inference::*;
pub use preview::*;
pub use navigation::*;
