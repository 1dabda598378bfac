//! Core data model for the starter list engine.
//!
//! `record` holds the wire types deserialized from a fetched starter list,
//! `row` the backend-agnostic table rows the engine emits, and `document`
//! the assembled output contract a rendering backend consumes.

mod document;
mod record;
mod row;

pub use document::{AssembledList, JudgeAssignment, LayoutParams, Masthead};
pub use record::{
    Athlete, BreakEntry, Competition, Division, DressageTest, Horse, JudgeEntry, NumberOrText,
    RecordError, Show, StarterEntry, StarterListRecord,
};
pub use row::{Background, RowDescriptor, RowKind, RowStyle};
