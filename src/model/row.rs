//! Backend-agnostic table rows.
//!
//! A rendering backend maps these onto its own primitives; the engine
//! never touches fonts, pages, or colors, only row semantics.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a row is, independent of how a backend draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    /// The column header row.
    Header,
    /// A group ("Abteilung") boundary row.
    Group,
    /// A scheduled break in the running order.
    Pause,
    /// One competitor.
    Starter,
}

/// The background a backend should paint for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Background {
    None,
    /// Alternating zebra tint.
    Stripe,
    /// Dark panel used for header and group rows.
    Panel,
    /// Whole-row grey for withdrawn starters, styles that opt in only.
    Greyed,
}

/// Presentation metadata attached to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowStyle {
    /// Zebra parity. Withdrawal never breaks stripe continuity.
    pub striped: bool,
    /// Strike the row's text through.
    pub withdrawn: bool,
    /// The first cell spans every column (group and pause rows).
    pub span_all: bool,
    pub background: Background,
}

/// One emitted table row: pre-formatted cells plus presentation metadata.
///
/// Cell count always equals the active layout's column count; blank cells
/// are empty strings, multi-line cells use `\n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDescriptor {
    pub kind: RowKind,
    pub cells: Vec<String>,
    pub style: RowStyle,
    /// Flag asset for the nation cell, when the layout shows one and the
    /// probe found a file.
    pub flag: Option<PathBuf>,
}
