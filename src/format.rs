//! Text formatting for times, dates, durations, and ages.

use jiff::civil::DateTime;

use crate::labels::{self, Locale};

/// Parse a start timestamp as delivered by the service.
///
/// Timestamps are wall-clock values; a trailing `Z` or UTC offset is
/// dropped rather than converted, matching how the printed documents have
/// always read.
pub fn parse_start(raw: &str) -> Option<DateTime> {
    let s = raw.trim().trim_end_matches('Z');
    if let Ok(dt) = s.parse() {
        return Some(dt);
    }
    let offset = s.rfind('+').or_else(|| s.rfind('-').filter(|&i| i > 10))?;
    s[..offset].parse().ok()
}

/// Clock time for the table's time cell: `08:00:00`.
pub fn clock_time(dt: DateTime) -> String {
    format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
}

/// Long date line for the masthead.
///
/// German: `Samstag, 6. September 2025 um 08:00 Uhr`.
/// English: `Saturday, 6 September 2025 at 08:00`.
pub fn long_date(dt: DateTime, locale: Locale) -> String {
    let weekday = labels::weekday_name(dt.weekday(), locale);
    let month = labels::month_name(dt.month(), locale);
    match locale {
        Locale::German => format!(
            "{weekday}, {}. {month} {} um {:02}:{:02} Uhr",
            dt.day(),
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        Locale::English => format!(
            "{weekday}, {} {month} {} at {:02}:{:02}",
            dt.day(),
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
    }
}

/// Human-readable pause label.
///
/// Zero seconds renders the free text alone, or the bare localized word
/// for "break" if there is none.
pub fn pause_text(total_seconds: i64, info: &str, locale: Locale) -> String {
    let word = locale.pause_word();
    let secs = total_seconds.max(0);
    if secs == 0 {
        return if info.is_empty() { word.to_string() } else { info.to_string() };
    }
    let duration = if secs >= 3600 {
        format!(
            "{} {} {:02} {}",
            secs / 3600,
            locale.hours_abbr(),
            (secs % 3600) / 60,
            locale.minutes_abbr()
        )
    } else if secs >= 60 {
        format!("{} {}", secs / 60, locale.minutes_abbr())
    } else {
        format!("{secs} {}", locale.seconds_abbr())
    };
    if info.is_empty() {
        format!("{word} ({duration})")
    } else {
        format!("{word} ({duration}) - {info}")
    }
}

/// Horse age line from its birth year: `11jähr.` / `11 y.o.`.
pub fn horse_age(breeding_season: i64, current_year: i16, locale: Locale) -> Option<String> {
    let age = i64::from(current_year) - breeding_season;
    if !(0..200).contains(&age) {
        return None;
    }
    Some(match locale {
        Locale::German => format!("{age}jähr."),
        Locale::English => format!("{age} y.o."),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naive_and_zulu_timestamps() {
        let dt = parse_start("2025-09-06T08:00:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 9, 6));
        let dt = parse_start("2025-09-06T08:00:00Z").unwrap();
        assert_eq!(clock_time(dt), "08:00:00");
        let dt = parse_start("2025-09-06T08:30:00+02:00").unwrap();
        assert_eq!(clock_time(dt), "08:30:00");
        assert!(parse_start("not a date").is_none());
    }

    #[test]
    fn long_date_lines_are_localized() {
        let dt = parse_start("2025-09-06T08:00:00").unwrap();
        assert_eq!(
            long_date(dt, Locale::German),
            "Samstag, 6. September 2025 um 08:00 Uhr"
        );
        assert_eq!(
            long_date(dt, Locale::English),
            "Saturday, 6 September 2025 at 08:00"
        );
    }

    #[test]
    fn pause_text_picks_the_coarsest_fitting_unit() {
        assert_eq!(pause_text(3900, "", Locale::German), "Pause (1 Std. 05 Min.)");
        assert_eq!(pause_text(3900, "", Locale::English), "Break (1 h 05 min)");
        assert_eq!(pause_text(600, "", Locale::German), "Pause (10 Min.)");
        assert_eq!(pause_text(45, "", Locale::English), "Break (45 sec)");
    }

    #[test]
    fn pause_text_appends_free_text() {
        assert_eq!(
            pause_text(600, "Abreiten Abt. 2", Locale::German),
            "Pause (10 Min.) - Abreiten Abt. 2"
        );
        // Zero seconds with text renders the text alone.
        assert_eq!(pause_text(0, "Siegerehrung", Locale::German), "Siegerehrung");
        assert_eq!(pause_text(0, "", Locale::German), "Pause");
        assert_eq!(pause_text(0, "", Locale::English), "Break");
    }

    #[test]
    fn horse_age_rejects_nonsense_years() {
        assert_eq!(horse_age(2014, 2025, Locale::German).as_deref(), Some("11jähr."));
        assert_eq!(horse_age(2014, 2025, Locale::English).as_deref(), Some("11 y.o."));
        assert_eq!(horse_age(2030, 2025, Locale::German), None);
    }
}
