//! Judge panel composition.
//!
//! Canonical dressage positions come first in the fixed `E,H,C,M,B`
//! order; a position may hold several judges and all of them are kept
//! together. Everyone else follows, sorted by label. One judging scheme
//! additionally attaches a task name per position, resolved from the
//! auxiliary test definitions.

use std::collections::HashMap;

use crate::labels::{self, CANONICAL_PANEL, Locale, POSITION_LETTERS};
use crate::model::{DressageTest, JudgeAssignment, JudgeEntry};

/// Compose the ordered judge panel.
///
/// With `with_tasks`, a `position → task` map is built from the test
/// definitions, keyed by the raw unmapped position value. Only judges at
/// arena-letter positions get a task; auxiliary positions (warm-up,
/// water) always come out empty, even if their raw value happens to be in
/// the map.
pub fn compose(
    judges: &[JudgeEntry],
    tests: &[DressageTest],
    with_tasks: bool,
    locale: Locale,
) -> Vec<JudgeAssignment> {
    let task_map: HashMap<String, &str> = if with_tasks {
        let mut map = HashMap::new();
        for test in tests {
            if test.name.is_empty() {
                continue;
            }
            for position in &test.judge_positions {
                map.insert(position.key(), test.name.as_str());
            }
        }
        map
    } else {
        HashMap::new()
    };

    let labeled: Vec<JudgeAssignment> = judges
        .iter()
        .map(|judge| {
            let label = judge
                .position
                .as_ref()
                .map_or_else(String::new, |p| labels::position_label(p, locale));
            let task = if POSITION_LETTERS.contains(&label.as_str()) {
                judge
                    .position
                    .as_ref()
                    .and_then(|p| task_map.get(&p.key()))
                    .map_or_else(String::new, |t| (*t).to_string())
            } else {
                String::new()
            };
            JudgeAssignment {
                label,
                name: judge.name.clone(),
                task,
            }
        })
        .collect();

    let mut ordered = Vec::with_capacity(labeled.len());
    for letter in CANONICAL_PANEL {
        for judge in &labeled {
            if judge.label == letter {
                ordered.push(judge.clone());
            }
        }
    }
    let mut others: Vec<JudgeAssignment> = labeled
        .into_iter()
        .filter(|j| !CANONICAL_PANEL.contains(&j.label.as_str()))
        .collect();
    others.sort_by(|a, b| a.label.cmp(&b.label));
    ordered.extend(others);
    ordered
}

/// Fixed-width canonical slots for main-table judge columns.
///
/// Available canonical positions fill in `E,H,C,M,B` order; remaining
/// slots are padded with empty strings, never omitted.
pub fn header_slots(judges: &[JudgeEntry], slots: usize, locale: Locale) -> Vec<String> {
    let available: Vec<String> = judges
        .iter()
        .filter_map(|j| j.position.as_ref())
        .map(|p| labels::position_label(p, locale))
        .collect();
    let mut out: Vec<String> = CANONICAL_PANEL
        .iter()
        .filter(|letter| available.iter().any(|l| l == *letter))
        .map(|letter| (*letter).to_string())
        .collect();
    out.truncate(slots);
    out.resize(slots, String::new());
    out
}

/// Panel heading, with the judging rule appended when one is present.
pub fn heading(judging_rule: &str, locale: Locale) -> String {
    if judging_rule.is_empty() {
        locale.judges_heading().to_string()
    } else {
        format!(
            "{} ({} {judging_rule})",
            locale.judges_heading(),
            locale.judging_rule_label()
        )
    }
}
