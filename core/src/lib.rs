//! Food Finder core.
//!
//! Search-as-you-type suggestions over a remote food catalog, the selection
//! workflow that fetches a food image, and the helpers that decode and save
//! that image locally.

pub mod application;
pub mod domain;
pub mod infrastructure;
