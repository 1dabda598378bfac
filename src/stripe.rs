//! Zebra-stripe assignment.
//!
//! Starter rows alternate tint, starting untinted at the top of the list
//! and after every group row. A pause row inverts the tint of the starter
//! right before it, and the starter after the pause continues the
//! alternation exactly as if the pause were not there. A pause before any
//! starter behaves as if a (striped) virtual starter preceded it, so it
//! comes out untinted.

use crate::sequence::SequencedRow;

/// Stripe flag for each row, parallel to the input slice.
///
/// Group rows are never striped; they carry the panel background instead.
pub fn assign(rows: &[SequencedRow<'_>]) -> Vec<bool> {
    let mut counter: u64 = 0;
    rows.iter()
        .map(|row| match row {
            SequencedRow::Group { .. } => {
                counter = 0;
                false
            }
            SequencedRow::Starter { .. } => {
                let striped = counter % 2 == 1;
                counter += 1;
                striped
            }
            // Opposite of the starter before it; counter untouched, so the
            // next starter's parity is unaffected by the pause.
            SequencedRow::Pause { .. } => counter % 2 == 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breaks::BreakIndex;
    use crate::model::{BreakEntry, NumberOrText, StarterEntry};
    use crate::sequence::sequence;

    fn starter(number: i64, group: Option<i64>) -> StarterEntry {
        StarterEntry {
            start_number: Some(NumberOrText::Number(number)),
            group_number: group,
            ..StarterEntry::default()
        }
    }

    fn brk(anchor: i64) -> BreakEntry {
        BreakEntry {
            after_number_in_competition: Some(NumberOrText::Number(anchor)),
            total_seconds: 60,
            information_text: String::new(),
        }
    }

    fn starter_stripes(rows: &[SequencedRow<'_>], stripes: &[bool]) -> Vec<bool> {
        rows.iter()
            .zip(stripes)
            .filter_map(|(row, striped)| {
                matches!(row, SequencedRow::Starter { .. }).then_some(*striped)
            })
            .collect()
    }

    #[test]
    fn starters_alternate_from_untinted() {
        let starters: Vec<_> = (1..=4).map(|n| starter(n, None)).collect();
        let index = BreakIndex::build(&[]);
        let rows = sequence(&starters, &index);
        assert_eq!(assign(&rows), [false, true, false, true]);
    }

    #[test]
    fn group_rows_reset_the_alternation() {
        let starters = [
            starter(1, Some(1)),
            starter(2, Some(1)),
            starter(3, Some(2)),
            starter(4, Some(2)),
        ];
        let index = BreakIndex::build(&[]);
        let rows = sequence(&starters, &index);
        // group, s1, s2, group, s3, s4
        assert_eq!(assign(&rows), [false, false, true, false, false, true]);
    }

    #[test]
    fn pause_inverts_its_predecessor_without_shifting_the_rest() {
        let starters: Vec<_> = (1..=3).map(|n| starter(n, None)).collect();
        let breaks = [brk(1)];
        let index = BreakIndex::build(&breaks);
        let rows = sequence(&starters, &index);
        // s1(unstriped), pause(striped = opposite of s1), s2(striped), s3
        assert_eq!(assign(&rows), [false, true, true, false]);

        // The starters' stripes match the no-pause sequence exactly.
        let no_break = BreakIndex::build(&[]);
        let plain_rows = sequence(&starters, &no_break);
        assert_eq!(
            starter_stripes(&rows, &assign(&rows)),
            starter_stripes(&plain_rows, &assign(&plain_rows)),
        );
    }

    #[test]
    fn pause_after_a_striped_starter_is_unstriped() {
        let starters: Vec<_> = (1..=3).map(|n| starter(n, None)).collect();
        let breaks = [brk(2)];
        let index = BreakIndex::build(&breaks);
        let rows = sequence(&starters, &index);
        // s1, s2(striped), pause(unstriped), s3(unstriped)
        assert_eq!(assign(&rows), [false, true, false, false]);
    }

    #[test]
    fn pause_before_the_first_starter_is_untinted() {
        // Scenario: break anchored at 0, three ungrouped starters.
        let starters: Vec<_> = (1..=3).map(|n| starter(n, None)).collect();
        let breaks = [brk(0)];
        let index = BreakIndex::build(&breaks);
        let rows = sequence(&starters, &index);
        assert!(matches!(rows[0], SequencedRow::Pause { .. }));
        assert_eq!(assign(&rows), [false, false, true, false]);
    }

    #[test]
    fn consecutive_starters_always_differ() {
        let starters: Vec<_> = (1..=10).map(|n| starter(n, None)).collect();
        let breaks = [brk(3), brk(7)];
        let index = BreakIndex::build(&breaks);
        let rows = sequence(&starters, &index);
        let stripes = starter_stripes(&rows, &assign(&rows));
        for pair in stripes.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
