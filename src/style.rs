//! Style layouts: the per-document-variant configuration.
//!
//! Every visual variant of the printed list is the same engine run with a
//! different layout — a column list plus a few flags. Layouts are data in
//! a closed registry, selected by name; there is no dynamic loading.

use crate::format;
use crate::labels::Locale;
use crate::model::{Horse, StarterEntry};

/// One table column. The engine fills cells per variant; a backend only
/// sees the resulting strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Start number, hors-concours marker folded underneath.
    StartNumber,
    /// Start number with the time (when shown) folded underneath, for
    /// layouts without a separate time column.
    StartNumberTimed,
    StartTime,
    /// Horse head number.
    HorseNumber,
    Horse,
    Athlete,
    /// Athlete and horse combined in one cell.
    AthleteHorse,
    /// Nationality display code; the flag asset rides on the row.
    Nation,
    /// Blank result column.
    Result,
    /// Blank score column headed by a canonical judge slot.
    Judge(usize),
    ScoreTechnical,
    ScoreQuality,
    ScoreFinal,
}

/// A named document style: locale, columns, and variant flags.
#[derive(Debug, Clone)]
pub struct StyleLayout {
    pub name: &'static str,
    pub locale: Locale,
    pub columns: &'static [Column],
    /// Canonical judge slots in the table header (0, 3, or 5).
    pub judge_slots: usize,
    /// Attach task names from the dressage test definitions.
    pub judge_tasks: bool,
    /// Grey the whole withdrawn row in addition to striking the text.
    /// Deliberately per-style; the printed variants disagree.
    pub grey_withdrawn_rows: bool,
    /// Show the hors-concours marker in the result column instead of
    /// under the start number.
    pub hc_marker_in_result: bool,
    /// Render every horse of a starter, not only the first.
    pub all_horses: bool,
}

/// The closed style registry.
pub static STYLES: &[StyleLayout] = &[
    StyleLayout {
        name: "kompakt",
        locale: Locale::German,
        columns: &[
            Column::StartNumberTimed,
            Column::HorseNumber,
            Column::Athlete,
            Column::Horse,
            Column::Result,
        ],
        judge_slots: 0,
        judge_tasks: false,
        grey_withdrawn_rows: true,
        hc_marker_in_result: true,
        all_horses: true,
    },
    StyleLayout {
        name: "national",
        locale: Locale::German,
        columns: &[
            Column::StartNumber,
            Column::StartTime,
            Column::HorseNumber,
            Column::Horse,
            Column::Athlete,
            Column::Nation,
        ],
        judge_slots: 0,
        judge_tasks: false,
        grey_withdrawn_rows: false,
        hc_marker_in_result: false,
        all_horses: false,
    },
    StyleLayout {
        name: "international",
        locale: Locale::English,
        columns: &[
            Column::StartNumberTimed,
            Column::HorseNumber,
            Column::Horse,
            Column::Athlete,
            Column::Nation,
        ],
        judge_slots: 0,
        judge_tasks: false,
        grey_withdrawn_rows: false,
        hc_marker_in_result: false,
        all_horses: false,
    },
    StyleLayout {
        name: "dressage-3",
        locale: Locale::German,
        columns: &[
            Column::StartNumberTimed,
            Column::HorseNumber,
            Column::AthleteHorse,
            Column::Judge(0),
            Column::Judge(1),
            Column::Judge(2),
            Column::ScoreFinal,
        ],
        judge_slots: 3,
        judge_tasks: false,
        grey_withdrawn_rows: true,
        hc_marker_in_result: false,
        all_horses: false,
    },
    StyleLayout {
        name: "dressage-5",
        locale: Locale::German,
        columns: &[
            Column::StartNumberTimed,
            Column::HorseNumber,
            Column::AthleteHorse,
            Column::Nation,
            Column::Judge(0),
            Column::Judge(1),
            Column::Judge(2),
            Column::Judge(3),
            Column::Judge(4),
        ],
        judge_slots: 5,
        judge_tasks: false,
        grey_withdrawn_rows: false,
        hc_marker_in_result: false,
        all_horses: false,
    },
    StyleLayout {
        name: "dressage-tasks",
        locale: Locale::German,
        columns: &[
            Column::StartNumberTimed,
            Column::AthleteHorse,
            Column::Nation,
            Column::ScoreTechnical,
            Column::ScoreQuality,
            Column::ScoreFinal,
        ],
        judge_slots: 0,
        judge_tasks: true,
        grey_withdrawn_rows: false,
        hc_marker_in_result: false,
        all_horses: false,
    },
    StyleLayout {
        name: "dressage-tasks-int",
        locale: Locale::English,
        columns: &[
            Column::StartNumberTimed,
            Column::AthleteHorse,
            Column::Nation,
            Column::ScoreTechnical,
            Column::ScoreQuality,
            Column::ScoreFinal,
        ],
        judge_slots: 0,
        judge_tasks: true,
        grey_withdrawn_rows: false,
        hc_marker_in_result: false,
        all_horses: false,
    },
];

/// Look a style up by name.
pub fn by_name(name: &str) -> Option<&'static StyleLayout> {
    STYLES.iter().find(|s| s.name == name)
}

impl StyleLayout {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether any column shows a nationality (and wants a flag asset).
    pub fn shows_nation(&self) -> bool {
        self.columns.contains(&Column::Nation)
    }

    /// Header cells, with judge slot columns headed by their letters.
    pub fn header_cells(&self, judge_slots: &[String]) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| match column {
                Column::Judge(i) => judge_slots.get(*i).cloned().unwrap_or_default(),
                other => header_label(*other, self.locale).to_string(),
            })
            .collect()
    }

    /// Cells for a group row: label in the first cell, rest blank.
    pub fn group_cells(&self, number: i64) -> Vec<String> {
        self.span_cells(format!("{} {number}", self.locale.group_prefix()))
    }

    /// Cells for a pause row: the pause text in the first cell.
    pub fn pause_cells(&self, text: String) -> Vec<String> {
        self.span_cells(text)
    }

    fn span_cells(&self, first: String) -> Vec<String> {
        let mut cells = vec![String::new(); self.columns.len()];
        cells[0] = first;
        cells
    }

    /// Cells for one starter row.
    pub fn starter_cells(
        &self,
        entry: &StarterEntry,
        show_time: bool,
        current_year: i16,
    ) -> Vec<String> {
        let number = entry
            .start_number
            .as_ref()
            .map_or_else(String::new, ToString::to_string);
        let time = if show_time {
            entry
                .start_time
                .as_deref()
                .and_then(format::parse_start)
                .map_or_else(String::new, format::clock_time)
        } else {
            String::new()
        };
        let marker = if entry.hors_concours {
            self.locale.hors_concours_marker()
        } else {
            ""
        };
        let marker_under_number = if self.hc_marker_in_result { "" } else { marker };

        self.columns
            .iter()
            .map(|column| match column {
                Column::StartNumber => stack(&number, marker_under_number),
                Column::StartNumberTimed => stack(&stack(&number, &time), marker_under_number),
                Column::StartTime => time.clone(),
                Column::HorseNumber => entry
                    .horses
                    .first()
                    .and_then(|h| h.cno.as_ref())
                    .map_or_else(String::new, ToString::to_string),
                Column::Horse => self.horse_cell(entry, current_year),
                Column::Athlete => self.athlete_cell(entry),
                Column::AthleteHorse => stack(&self.athlete_cell(entry), &self.horse_cell(entry, current_year)),
                Column::Nation => nation_code(&entry.athlete.nation),
                Column::Result => {
                    if self.hc_marker_in_result {
                        marker.to_string()
                    } else {
                        String::new()
                    }
                }
                Column::Judge(_) | Column::ScoreTechnical | Column::ScoreQuality
                | Column::ScoreFinal => String::new(),
            })
            .collect()
    }

    fn horse_cell(&self, entry: &StarterEntry, current_year: i16) -> String {
        let blocks: Vec<String> = if self.all_horses {
            entry
                .horses
                .iter()
                .map(|h| horse_block(h, self.locale, current_year))
                .collect()
        } else {
            entry
                .horses
                .first()
                .map(|h| horse_block(h, self.locale, current_year))
                .into_iter()
                .collect()
        };
        blocks.join("\n\n")
    }

    fn athlete_cell(&self, entry: &StarterEntry) -> String {
        let athlete = &entry.athlete;
        let nation = athlete.nation.trim();
        let second = if !nation.is_empty()
            && !nation.eq_ignore_ascii_case(self.locale.domestic_nation())
        {
            crate::nations::country_name(nation, self.locale)
        } else {
            athlete.club.clone()
        };
        stack(&athlete.name, &second)
    }
}

/// Join two lines, dropping whichever is empty.
fn stack(top: &str, bottom: &str) -> String {
    match (top.is_empty(), bottom.is_empty()) {
        (_, true) => top.to_string(),
        (true, false) => bottom.to_string(),
        (false, false) => format!("{top}\n{bottom}"),
    }
}

fn nation_code(raw: &str) -> String {
    crate::nations::iso3(raw).map_or_else(String::new, |iso| crate::nations::display_code(&iso))
}

/// The detail block under a horse's name: age, color, sex, studbook,
/// pedigree, then owner/breeder lines. Identical owner and breeder
/// collapse into one combined line.
fn horse_block(horse: &Horse, locale: Locale, current_year: i16) -> String {
    let mut details: Vec<String> = Vec::new();
    if let Some(year) = horse.breeding_season.as_ref().and_then(crate::model::NumberOrText::as_int) {
        if let Some(age) = format::horse_age(year, current_year, locale) {
            details.push(age);
        }
    }
    if !horse.color.is_empty() {
        details.push(horse.color.clone());
    }
    if !horse.sex.is_empty() {
        details.push(crate::labels::sex_label(&horse.sex, locale));
    }
    if !horse.studbook.is_empty() {
        details.push(horse.studbook.clone());
    }
    match (horse.sire.as_str(), horse.dam_sire.as_str()) {
        ("", _) => {}
        (sire, "") => details.push(sire.to_string()),
        (sire, dam_sire) => details.push(format!("{sire} x {dam_sire}")),
    }

    let mut block = horse.name.clone();
    if !details.is_empty() {
        block = stack(&block, &details.join(" / "));
    }
    let owner = horse.owner.trim();
    let breeder = horse.breeder.trim();
    let people = match (owner.is_empty(), breeder.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("{}: {owner}", locale.owner_abbr()),
        (true, false) => format!("{}: {breeder}", locale.breeder_abbr()),
        (false, false) if owner == breeder => {
            format!("{}: {owner}", locale.owner_and_breeder_abbr())
        }
        (false, false) => format!(
            "{}: {owner} / {}: {breeder}",
            locale.owner_abbr(),
            locale.breeder_abbr()
        ),
    };
    stack(&block, &people)
}

/// Localized header label per column.
fn header_label(column: Column, locale: Locale) -> &'static str {
    match (column, locale) {
        (Column::StartNumber, _) => "#",
        (Column::StartNumberTimed, Locale::German) => "Start",
        (Column::StartNumberTimed, Locale::English) => "Start",
        (Column::StartTime, Locale::German) => "Zeit",
        (Column::StartTime, Locale::English) => "Time",
        (Column::HorseNumber, Locale::German) => "KNR",
        (Column::HorseNumber, Locale::English) => "CNO",
        (Column::Horse, Locale::German) => "Pferd",
        (Column::Horse, Locale::English) => "Horse",
        (Column::Athlete, Locale::German) => "Reiter",
        (Column::Athlete, Locale::English) => "Athlete",
        (Column::AthleteHorse, Locale::German) => "Reiter / Pferd",
        (Column::AthleteHorse, Locale::English) => "Athlete / Horse",
        (Column::Nation, _) => "Nat.",
        (Column::Result, Locale::German) => "Ergeb.",
        (Column::Result, Locale::English) => "Result",
        (Column::Judge(_), _) => "",
        (Column::ScoreTechnical, Locale::German) => "Aufgabe",
        (Column::ScoreTechnical, Locale::English) => "Technical",
        (Column::ScoreQuality, Locale::German) => "Qualität",
        (Column::ScoreQuality, Locale::English) => "Quality",
        (Column::ScoreFinal, Locale::German) => "Total",
        (Column::ScoreFinal, Locale::English) => "Final",
    }
}
