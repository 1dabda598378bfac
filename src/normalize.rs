//! Field normalization: effective start time and masthead fields.

use jiff::civil::DateTime;

use crate::format;
use crate::labels::Locale;
use crate::model::{Masthead, StarterListRecord};

/// Resolve the effective competition start time.
///
/// Precedence: the division matching the current division number (which
/// may arrive as a numeric string), else the first division, else the
/// competition-level start, else the show-level start. `None` is normal;
/// callers render no date line.
pub fn resolve_start(record: &StarterListRecord) -> Option<DateTime> {
    let competition = &record.competition;
    let divisions = &competition.divisions;

    let division_start = if divisions.is_empty() {
        None
    } else if let Some(current) = competition
        .division_number
        .as_ref()
        .and_then(crate::model::NumberOrText::as_int)
    {
        divisions
            .iter()
            .find(|d| d.number == Some(current))
            .and_then(|d| d.start.as_deref())
    } else {
        divisions.first().and_then(|d| d.start.as_deref())
    };

    let raw = division_start
        .or(competition.start.as_deref())
        .or(record.show.start.as_deref())?;
    format::parse_start(raw)
}

/// Build the masthead for a record, in the given locale.
///
/// Pure projection; absent fields stay empty and are simply not rendered.
pub fn masthead(record: &StarterListRecord, locale: Locale) -> Masthead {
    let competition = &record.competition;

    let competition_line = match (&competition.number, competition.title.as_str()) {
        (Some(number), "") => number.to_string(),
        (Some(number), title) => format!("{number}: {title}"),
        (None, title) => title.to_string(),
    };

    let round_line = record
        .round_number
        .filter(|&r| r > 1)
        .map(|r| format!("{} {r}", locale.round_label()));

    Masthead {
        heading: locale.list_heading().to_string(),
        show_title: record.show.title.clone(),
        competition_line,
        subtitle: competition.subtitle.clone(),
        information_text: competition.information_text.clone(),
        date_line: resolve_start(record).map(|dt| format::long_date(dt, locale)),
        location: competition.location.clone(),
        round_line,
    }
}
