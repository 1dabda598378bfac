//! Starter list document assembly.
//!
//! Turns one fetched competition starter list into a backend-agnostic
//! document: an ordered row list with grouping, break, and zebra-stripe
//! annotations, a composed judges panel, and resolved flag/logo assets.
//! Fetching the record and drawing the final bytes are the caller's
//! business; this crate only decides what the document says.

pub mod assets;
pub mod breaks;
pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod judges;
pub mod labels;
pub mod model;
pub mod nations;
pub mod normalize;
pub mod sequence;
pub mod stripe;
pub mod style;

pub use assets::AssetLibrary;
pub use engine::assemble;
pub use labels::Locale;
pub use model::{AssembledList, RowDescriptor, StarterListRecord};
pub use style::StyleLayout;
