//! Output generation: envelopes and the JSON files that carry them.
//!
//! # Submodules
//!
//! - [`envelope`]: wraps a site's records (or its failure) in the uniform shape
//! - [`json`]: writes one envelope per site target to the output directory

pub mod envelope;
pub mod json;
