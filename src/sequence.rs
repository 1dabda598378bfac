//! Row sequencing: the order of group, pause, and starter rows.
//!
//! This is the part every document style shares. Walks starters in input
//! order, opens a group row at each division boundary, decides which rows
//! show a start time, and splices breaks in at their anchors.

use crate::breaks::BreakIndex;
use crate::model::{BreakEntry, StarterEntry};

/// One row in running order, before presentation annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum SequencedRow<'a> {
    /// A division boundary ("Abteilung N").
    Group { number: i64 },
    Pause { entry: &'a BreakEntry },
    Starter {
        entry: &'a StarterEntry,
        /// Whether this row shows its own start time. Grouped starters
        /// show it once per group; ungrouped starters always do.
        show_time: bool,
    },
}

/// A group number that is present and positive; anything else means
/// ungrouped.
fn group_of(entry: &StarterEntry) -> Option<i64> {
    entry.group_number.filter(|&g| g > 0)
}

/// Sequence starters and breaks into rows.
///
/// The bucket at anchor 0 is queried exactly once, before any starter row.
/// A starter whose number does not parse still gets its row; only its
/// trailing break lookup is skipped.
pub fn sequence<'a>(
    starters: &'a [StarterEntry],
    breaks: &BreakIndex<'a>,
) -> Vec<SequencedRow<'a>> {
    let mut rows = Vec::new();

    for entry in breaks.after(0) {
        rows.push(SequencedRow::Pause { entry });
    }

    let mut current_group: Option<i64> = None;
    let mut group_time_shown = false;

    for entry in starters {
        let group = group_of(entry);
        if let Some(number) = group {
            if current_group != Some(number) {
                rows.push(SequencedRow::Group { number });
                current_group = Some(number);
                group_time_shown = false;
            }
        }

        let show_time = match group {
            None => true,
            Some(_) => {
                if group_time_shown {
                    false
                } else {
                    group_time_shown = true;
                    true
                }
            }
        };
        rows.push(SequencedRow::Starter { entry, show_time });

        if let Some(number) = entry.start_number.as_ref().and_then(crate::model::NumberOrText::as_int) {
            for brk in breaks.after(number) {
                rows.push(SequencedRow::Pause { entry: brk });
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NumberOrText;

    fn starter(number: i64, group: Option<i64>) -> StarterEntry {
        StarterEntry {
            start_number: Some(NumberOrText::Number(number)),
            start_time: Some("2025-09-06T08:00:00".into()),
            group_number: group,
            ..StarterEntry::default()
        }
    }

    fn brk(anchor: i64) -> BreakEntry {
        BreakEntry {
            after_number_in_competition: Some(NumberOrText::Number(anchor)),
            total_seconds: 600,
            information_text: String::new(),
        }
    }

    fn kinds(rows: &[SequencedRow<'_>]) -> Vec<&'static str> {
        rows.iter()
            .map(|r| match r {
                SequencedRow::Group { .. } => "group",
                SequencedRow::Pause { .. } => "pause",
                SequencedRow::Starter { .. } => "starter",
            })
            .collect()
    }

    #[test]
    fn anchor_zero_emits_before_the_first_starter() {
        let starters = [starter(1, None), starter(2, None), starter(3, None)];
        let breaks = [brk(0)];
        let index = BreakIndex::build(&breaks);
        let rows = sequence(&starters, &index);
        assert_eq!(kinds(&rows), ["pause", "starter", "starter", "starter"]);
    }

    #[test]
    fn group_boundaries_open_group_rows_and_gate_times() {
        let starters = [
            starter(1, Some(1)),
            starter(2, Some(1)),
            starter(3, Some(2)),
        ];
        let index = BreakIndex::build(&[]);
        let rows = sequence(&starters, &index);
        assert_eq!(kinds(&rows), ["group", "starter", "starter", "group", "starter"]);
        let times: Vec<bool> = rows
            .iter()
            .filter_map(|r| match r {
                SequencedRow::Starter { show_time, .. } => Some(*show_time),
                _ => None,
            })
            .collect();
        assert_eq!(times, [true, false, true]);
        assert!(matches!(rows[0], SequencedRow::Group { number: 1 }));
        assert!(matches!(rows[3], SequencedRow::Group { number: 2 }));
    }

    #[test]
    fn ungrouped_starters_always_show_their_time() {
        let starters = [starter(1, None), starter(2, Some(0)), starter(3, None)];
        let index = BreakIndex::build(&[]);
        let rows = sequence(&starters, &index);
        assert_eq!(kinds(&rows), ["starter", "starter", "starter"]);
        assert!(rows.iter().all(|r| matches!(
            r,
            SequencedRow::Starter { show_time: true, .. }
        )));
    }

    #[test]
    fn breaks_follow_their_starter_in_record_order() {
        let starters = [starter(1, None), starter(2, None)];
        let breaks = [
            BreakEntry {
                after_number_in_competition: Some(NumberOrText::Number(1)),
                total_seconds: 100,
                information_text: String::new(),
            },
            BreakEntry {
                after_number_in_competition: Some(NumberOrText::Number(1)),
                total_seconds: 200,
                information_text: String::new(),
            },
        ];
        let index = BreakIndex::build(&breaks);
        let rows = sequence(&starters, &index);
        assert_eq!(kinds(&rows), ["starter", "pause", "pause", "starter"]);
        let secs: Vec<i64> = rows
            .iter()
            .filter_map(|r| match r {
                SequencedRow::Pause { entry } => Some(entry.total_seconds),
                _ => None,
            })
            .collect();
        assert_eq!(secs, [100, 200]);
    }

    #[test]
    fn unparseable_start_numbers_skip_only_the_break_lookup() {
        let mut odd = starter(1, None);
        odd.start_number = Some(NumberOrText::Text("1a".into()));
        let starters = [odd, starter(2, None)];
        let breaks = [brk(1)];
        let index = BreakIndex::build(&breaks);
        let rows = sequence(&starters, &index);
        // The "1a" starter is still emitted; its break lookup is skipped.
        assert_eq!(kinds(&rows), ["starter", "starter"]);
    }

    #[test]
    fn every_starter_emits_exactly_one_row() {
        let starters: Vec<StarterEntry> = (1..=20)
            .map(|n| starter(n, Some(n / 7 + 1)))
            .collect();
        let index = BreakIndex::build(&[]);
        let rows = sequence(&starters, &index);
        let count = rows
            .iter()
            .filter(|r| matches!(r, SequencedRow::Starter { .. }))
            .count();
        assert_eq!(count, starters.len());
    }
}
