//! The assembled output contract.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::RowDescriptor;

/// Header block above the table: everything the page top shows.
///
/// Absent fields are simply not rendered; a missing date line is normal,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Masthead {
    /// Localized list heading ("STARTERLISTE").
    pub heading: String,
    pub show_title: String,
    /// Competition number and title, joined for display.
    pub competition_line: String,
    pub subtitle: String,
    pub information_text: String,
    /// Long localized date line, resolved through the division →
    /// competition → show fallback chain.
    pub date_line: Option<String>,
    pub location: String,
    /// Round suffix for rounds past the first ("Runde 2").
    pub round_line: Option<String>,
}

/// One judge in the composed panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeAssignment {
    /// Canonical arena letter, localized auxiliary label, or the raw code.
    pub label: String,
    pub name: String,
    /// Task name for task-augmented judging schemes; empty otherwise.
    pub task: String,
}

/// Opaque presentation parameters threaded through to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    pub columns: usize,
    pub spacing_top_cm: Option<f64>,
    pub spacing_bottom_cm: Option<f64>,
    pub logo_max_width_cm: Option<f64>,
}

/// Everything a document backend needs to draw one starter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledList {
    /// Name of the style layout the cells were formatted for.
    pub style: String,
    pub masthead: Masthead,
    pub rows: Vec<RowDescriptor>,
    /// Localized panel heading, including the judging rule when present.
    pub judges_heading: String,
    pub judges: Vec<JudgeAssignment>,
    /// Fixed-width canonical judge slots for layouts with judge columns;
    /// padded with empty strings, never truncated below the slot count.
    pub judge_slots: Vec<String>,
    pub logo: Option<PathBuf>,
    pub layout: LayoutParams,
}
