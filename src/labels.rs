//! Static label tables, selected by locale.
//!
//! Everything here is an immutable mapping: judge position codes, sex
//! codes, weekday and month names, and the handful of fixed phrases the
//! generated labels use. No runtime state.

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

use crate::model::NumberOrText;

/// Language of generated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Locale {
    German,
    English,
}

/// Canonical arena letters for integer position codes 0–11, in code order.
pub const POSITION_LETTERS: [&str; 12] = [
    "E", "H", "C", "M", "B", "K", "V", "S", "R", "P", "F", "A",
];

/// The fixed dressage panel, in the order judges are emitted.
pub const CANONICAL_PANEL: [&str; 5] = ["E", "H", "C", "M", "B"];

/// Map a raw judge position to its display label.
///
/// Integer codes 0–11 become arena letters, known literals become
/// localized auxiliary labels, anything else passes through as its own
/// string.
pub fn position_label(position: &NumberOrText, locale: Locale) -> String {
    if let Some(code) = position.as_int() {
        if let Ok(idx) = usize::try_from(code) {
            if let Some(letter) = POSITION_LETTERS.get(idx) {
                return (*letter).to_string();
            }
        }
        return code.to_string();
    }
    let raw = position.key();
    match (raw.as_str(), locale) {
        ("WARM_UP_AREA", Locale::German) => "Aufsicht".to_string(),
        ("WARM_UP_AREA", Locale::English) => "Steward".to_string(),
        ("WATER_JUMP", Locale::German) => "Wasser".to_string(),
        ("WATER_JUMP", Locale::English) => "Water".to_string(),
        _ => raw,
    }
}

/// Localized sex label; unrecognized codes pass through.
pub fn sex_label(sex: &str, locale: Locale) -> String {
    match (sex.to_ascii_uppercase().as_str(), locale) {
        ("STALLION", Locale::German) => "Hengst".to_string(),
        ("GELDING", Locale::German) => "Wallach".to_string(),
        ("MARE", Locale::German) => "Stute".to_string(),
        ("STALLION", Locale::English) => "Stallion".to_string(),
        ("GELDING", Locale::English) => "Gelding".to_string(),
        ("MARE", Locale::English) => "Mare".to_string(),
        _ => sex.to_string(),
    }
}

pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    match locale {
        Locale::German => match weekday {
            Weekday::Monday => "Montag",
            Weekday::Tuesday => "Dienstag",
            Weekday::Wednesday => "Mittwoch",
            Weekday::Thursday => "Donnerstag",
            Weekday::Friday => "Freitag",
            Weekday::Saturday => "Samstag",
            Weekday::Sunday => "Sonntag",
        },
        Locale::English => match weekday {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        },
    }
}

/// Month name for a 1-based month number. Out-of-range input yields `""`;
/// the caller only ever passes months from a parsed date.
pub fn month_name(month: i8, locale: Locale) -> &'static str {
    const GERMAN: [&str; 12] = [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ];
    const ENGLISH: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    let table = match locale {
        Locale::German => &GERMAN,
        Locale::English => &ENGLISH,
    };
    usize::try_from(month - 1)
        .ok()
        .and_then(|i| table.get(i).copied())
        .unwrap_or("")
}

impl Locale {
    pub fn list_heading(self) -> &'static str {
        match self {
            Self::German => "STARTERLISTE",
            Self::English => "STARTING ORDER",
        }
    }

    pub fn group_prefix(self) -> &'static str {
        match self {
            Self::German => "Abteilung",
            Self::English => "Division",
        }
    }

    pub fn pause_word(self) -> &'static str {
        match self {
            Self::German => "Pause",
            Self::English => "Break",
        }
    }

    pub fn hours_abbr(self) -> &'static str {
        match self {
            Self::German => "Std.",
            Self::English => "h",
        }
    }

    pub fn minutes_abbr(self) -> &'static str {
        match self {
            Self::German => "Min.",
            Self::English => "min",
        }
    }

    pub fn seconds_abbr(self) -> &'static str {
        match self {
            Self::German => "Sek.",
            Self::English => "sec",
        }
    }

    /// Marker for hors-concours starters.
    pub fn hors_concours_marker(self) -> &'static str {
        match self {
            Self::German => "AK",
            Self::English => "HC",
        }
    }

    pub fn judges_heading(self) -> &'static str {
        match self {
            Self::German => "Richter",
            Self::English => "Judges",
        }
    }

    pub fn judging_rule_label(self) -> &'static str {
        match self {
            Self::German => "Richtverfahren",
            Self::English => "judging rule",
        }
    }

    pub fn round_label(self) -> &'static str {
        match self {
            Self::German => "Runde",
            Self::English => "Round",
        }
    }

    pub fn owner_abbr(self) -> &'static str {
        match self {
            Self::German => "B",
            Self::English => "O",
        }
    }

    pub fn breeder_abbr(self) -> &'static str {
        match self {
            Self::German => "Z",
            Self::English => "Br",
        }
    }

    /// Combined label when owner and breeder are the same person.
    pub fn owner_and_breeder_abbr(self) -> &'static str {
        match self {
            Self::German => "B u. Z",
            Self::English => "O & Br",
        }
    }

    /// Starters from this nation show their club instead of a country name.
    pub fn domestic_nation(self) -> &'static str {
        match self {
            Self::German => "GER",
            Self::English => "GBR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_codes_map_to_arena_letters() {
        assert_eq!(position_label(&NumberOrText::Number(0), Locale::German), "E");
        assert_eq!(position_label(&NumberOrText::Number(2), Locale::German), "C");
        assert_eq!(position_label(&NumberOrText::Number(11), Locale::German), "A");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(position_label(&NumberOrText::Number(12), Locale::German), "12");
        assert_eq!(
            position_label(&NumberOrText::Text("GATE".into()), Locale::German),
            "GATE"
        );
    }

    #[test]
    fn auxiliary_literals_are_localized() {
        let warm_up = NumberOrText::Text("WARM_UP_AREA".into());
        assert_eq!(position_label(&warm_up, Locale::German), "Aufsicht");
        assert_eq!(position_label(&warm_up, Locale::English), "Steward");
    }

    #[test]
    fn numeric_strings_behave_like_integers() {
        assert_eq!(position_label(&NumberOrText::Text("3".into()), Locale::German), "M");
    }

    #[test]
    fn sex_labels_translate_or_pass_through() {
        assert_eq!(sex_label("MARE", Locale::German), "Stute");
        assert_eq!(sex_label("gelding", Locale::English), "Gelding");
        assert_eq!(sex_label("UNKNOWN", Locale::German), "UNKNOWN");
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1, Locale::German), "Januar");
        assert_eq!(month_name(12, Locale::English), "December");
        assert_eq!(month_name(0, Locale::German), "");
    }
}
