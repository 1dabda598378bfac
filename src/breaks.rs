//! Break index: which breaks occur after which start number.

use std::collections::HashMap;

use tracing::warn;

use crate::model::BreakEntry;

/// Where a break attaches in the running order.
///
/// `After(0)` is a real anchor — "before the very first starter" — and
/// must never be conflated with a missing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakAnchor {
    /// The record carried no anchor at all. Indexed but never emitted.
    Unanchored,
    /// After the starter with this start number.
    After(i64),
}

/// Mapping from anchor to the breaks scheduled there, in record order.
#[derive(Debug, Default)]
pub struct BreakIndex<'a> {
    buckets: HashMap<BreakAnchor, Vec<&'a BreakEntry>>,
}

impl<'a> BreakIndex<'a> {
    pub fn build(breaks: &'a [BreakEntry]) -> Self {
        let mut buckets: HashMap<BreakAnchor, Vec<&'a BreakEntry>> = HashMap::new();
        for entry in breaks {
            let anchor = match &entry.after_number_in_competition {
                None => BreakAnchor::Unanchored,
                Some(raw) => match raw.as_int() {
                    Some(n) => BreakAnchor::After(n),
                    None => {
                        warn!(key = %raw, "dropping break with unparseable anchor");
                        continue;
                    }
                },
            };
            buckets.entry(anchor).or_default().push(entry);
        }
        if let Some(unanchored) = buckets.get(&BreakAnchor::Unanchored) {
            warn!(
                count = unanchored.len(),
                "breaks without an anchor are never emitted"
            );
        }
        Self { buckets }
    }

    /// Breaks scheduled after start number `n`; `after(0)` is the bucket
    /// before the first starter.
    pub fn after(&self, n: i64) -> &[&'a BreakEntry] {
        self.buckets
            .get(&BreakAnchor::After(n))
            .map_or(&[], Vec::as_slice)
    }

    /// Breaks that carried no anchor.
    pub fn unanchored(&self) -> &[&'a BreakEntry] {
        self.buckets
            .get(&BreakAnchor::Unanchored)
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NumberOrText;

    fn entry(anchor: Option<NumberOrText>, secs: i64) -> BreakEntry {
        BreakEntry {
            after_number_in_competition: anchor,
            total_seconds: secs,
            information_text: String::new(),
        }
    }

    #[test]
    fn anchor_zero_is_distinct_from_missing() {
        let breaks = [
            entry(Some(NumberOrText::Number(0)), 600),
            entry(None, 300),
        ];
        let index = BreakIndex::build(&breaks);
        assert_eq!(index.after(0).len(), 1);
        assert_eq!(index.after(0)[0].total_seconds, 600);
        assert_eq!(index.unanchored().len(), 1);
    }

    #[test]
    fn shared_anchors_keep_record_order() {
        let breaks = [
            entry(Some(NumberOrText::Number(5)), 100),
            entry(Some(NumberOrText::Number(5)), 200),
            entry(Some(NumberOrText::Number(5)), 300),
        ];
        let index = BreakIndex::build(&breaks);
        let at_five: Vec<i64> = index.after(5).iter().map(|b| b.total_seconds).collect();
        assert_eq!(at_five, [100, 200, 300]);
    }

    #[test]
    fn textual_anchors_parse_like_integers() {
        let breaks = [entry(Some(NumberOrText::Text("12".into())), 60)];
        let index = BreakIndex::build(&breaks);
        assert_eq!(index.after(12).len(), 1);
    }

    #[test]
    fn unparseable_anchors_are_dropped_not_fatal() {
        let breaks = [
            entry(Some(NumberOrText::Text("after lunch".into())), 60),
            entry(Some(NumberOrText::Number(3)), 60),
        ];
        let index = BreakIndex::build(&breaks);
        assert_eq!(index.after(3).len(), 1);
        assert!(index.unanchored().is_empty());
    }

    #[test]
    fn missing_bucket_is_empty() {
        let index = BreakIndex::build(&[]);
        assert!(index.after(0).is_empty());
        assert!(index.after(7).is_empty());
    }
}
