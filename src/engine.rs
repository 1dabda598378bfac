//! Document assembly: one record in, one backend-agnostic document out.
//!
//! Pure and idempotent apart from the read-only asset probes; the same
//! record always yields the same rows, and records can be assembled
//! concurrently without shared state.

use crate::assets::AssetLibrary;
use crate::breaks::BreakIndex;
use crate::format;
use crate::model::{
    AssembledList, Background, LayoutParams, RowDescriptor, RowKind, RowStyle, StarterListRecord,
};
use crate::sequence::{self, SequencedRow};
use crate::style::StyleLayout;
use crate::{judges, normalize, stripe};

/// Assemble a starter list document for a style layout.
///
/// `current_year` feeds horse-age formatting; the CLI passes the wall
/// clock, tests pass a fixed year.
pub fn assemble(
    record: &StarterListRecord,
    style: &StyleLayout,
    assets: &AssetLibrary,
    current_year: i16,
) -> AssembledList {
    let locale = style.locale;
    let masthead = normalize::masthead(record, locale);

    let judge_slots = judges::header_slots(&record.competition.judges, style.judge_slots, locale);
    let panel = judges::compose(
        &record.competition.judges,
        &record.dressage_tests,
        style.judge_tasks,
        locale,
    );

    let index = BreakIndex::build(&record.breaks);
    let sequenced = sequence::sequence(&record.starters, &index);
    let stripes = stripe::assign(&sequenced);

    let mut rows = Vec::with_capacity(sequenced.len() + 1);
    rows.push(RowDescriptor {
        kind: RowKind::Header,
        cells: style.header_cells(&judge_slots),
        style: RowStyle {
            striped: false,
            withdrawn: false,
            span_all: false,
            background: Background::Panel,
        },
        flag: None,
    });

    for (row, &striped) in sequenced.iter().zip(&stripes) {
        rows.push(match row {
            SequencedRow::Group { number } => RowDescriptor {
                kind: RowKind::Group,
                cells: style.group_cells(*number),
                style: RowStyle {
                    striped: false,
                    withdrawn: false,
                    span_all: true,
                    background: Background::Panel,
                },
                flag: None,
            },
            SequencedRow::Pause { entry } => RowDescriptor {
                kind: RowKind::Pause,
                cells: style.pause_cells(format::pause_text(
                    entry.total_seconds,
                    &entry.information_text,
                    locale,
                )),
                style: RowStyle {
                    striped,
                    withdrawn: false,
                    span_all: true,
                    background: if striped { Background::Stripe } else { Background::None },
                },
                flag: None,
            },
            SequencedRow::Starter { entry, show_time } => {
                let background = if entry.withdrawn && style.grey_withdrawn_rows {
                    Background::Greyed
                } else if striped {
                    Background::Stripe
                } else {
                    Background::None
                };
                let flag = if style.shows_nation() {
                    assets.flag(&entry.athlete.nation)
                } else {
                    None
                };
                RowDescriptor {
                    kind: RowKind::Starter,
                    cells: style.starter_cells(entry, *show_time, current_year),
                    style: RowStyle {
                        striped,
                        withdrawn: entry.withdrawn,
                        span_all: false,
                        background,
                    },
                    flag,
                }
            }
        });
    }

    let logo = assets.logo(
        record.competition.number.as_ref(),
        record.competition.division_number.as_ref(),
    );

    AssembledList {
        style: style.name.to_string(),
        masthead,
        rows,
        judges_heading: judges::heading(&record.competition.judging_rule, locale),
        judges: panel,
        judge_slots,
        logo,
        layout: LayoutParams {
            columns: style.column_count(),
            spacing_top_cm: record.spacing_top_cm,
            spacing_bottom_cm: record.spacing_bottom_cm,
            logo_max_width_cm: record.logo_max_width_cm,
        },
    }
}
