//! Event-file reader.
//!
//! Each line holds `DATE; TYPE; TEXT`. `DATE` is `YYYY-MM-DD`, the literal
//! year `8888` (recurs every year), or `EASTER` with an optional `+N`/`-N`
//! day offset. `TYPE` is any combination of the letters `d` (anniversary),
//! `g` (generic), `m` (day off) and `=` (does not recur). Blank lines and
//! lines starting with `#` are ignored; malformed lines are logged and
//! skipped.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, TimeDelta};
use tracing::{debug, warn};

use crate::events::model::{Event, EventKinds};
use crate::foundation::error::{PhotocalError, PhotocalResult};

/// First year recurring events are expanded for.
pub const MIN_YEAR: i32 = 1980;
/// Last year recurring events are expanded for.
pub const MAX_YEAR: i32 = 2100;

/// Sentinel year meaning "every year, without an anniversary count".
const EVERY_YEAR: i32 = 8888;

/// Reads and parses every file in `paths`, returning the expanded events
/// sorted ascending by date. Events sharing a date keep their file order.
pub fn read_events_files(paths: &[PathBuf], lang: &str) -> PhotocalResult<Vec<Event>> {
    let mut events = Vec::new();
    for path in paths {
        let content = std::fs::read_to_string(path)
            .map_err(|err| PhotocalError::events(format!("{}: {err}", path.display())))?;
        let before = events.len();
        parse_events(&content, &path.display().to_string(), lang, &mut events);
        debug!("{}: {} events", path.display(), events.len() - before);
    }
    events.sort_by_key(|event| event.date);
    Ok(events)
}

/// Parses event lines from `content`, appending the expanded events to
/// `out` in line order. `source` names the input in log messages; `lang`
/// selects the wording of anniversary suffixes. The result is not sorted.
pub fn parse_events(content: &str, source: &str, lang: &str, out: &mut Vec<Event>) {
    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.splitn(3, ';').map(str::trim);
        let (Some(date_field), Some(kind_field), Some(text)) =
            (fields.next(), fields.next(), fields.next())
        else {
            warn!("{source}:{}: expected 'date; type; text', skipping", lineno + 1);
            continue;
        };
        if date_field.is_empty() || kind_field.is_empty() || text.is_empty() {
            warn!("{source}:{}: empty field, skipping", lineno + 1);
            continue;
        }
        let mut kinds = parse_kinds(kind_field);
        if kinds == EventKinds::default() {
            warn!(
                "{source}:{}: no recognized type in {kind_field:?}, skipping",
                lineno + 1
            );
            continue;
        }

        if let Some(delta) = parse_easter_offset(date_field) {
            let Some(step) = TimeDelta::try_days(delta) else {
                warn!("{source}:{}: offset {delta} out of range, skipping", lineno + 1);
                continue;
            };
            // Easter moves each year, so the instances never recur themselves
            // and an anniversary count would be meaningless.
            kinds.non_recurring = true;
            kinds.anniversary = false;
            for year in MIN_YEAR..=MAX_YEAR {
                let Some(date) =
                    easter_sunday(year).and_then(|day| day.checked_add_signed(step))
                else {
                    continue;
                };
                out.push(Event { date, kinds, text: text.to_owned() });
            }
            continue;
        }

        let Ok(base) = NaiveDate::parse_from_str(date_field, "%Y-%m-%d") else {
            warn!("{source}:{}: bad date {date_field:?}, skipping", lineno + 1);
            continue;
        };

        if base.year() == EVERY_YEAR {
            kinds.non_recurring = true;
            for year in MIN_YEAR..=MAX_YEAR {
                // Feb 29 simply has no instance in non-leap years.
                let Some(date) = NaiveDate::from_ymd_opt(year, base.month(), base.day())
                else {
                    continue;
                };
                out.push(Event { date, kinds, text: text.to_owned() });
            }
        } else if kinds.non_recurring {
            out.push(Event { date: base, kinds, text: text.to_owned() });
        } else {
            let first = base.year().max(MIN_YEAR);
            for year in first..=MAX_YEAR {
                let Some(date) = NaiveDate::from_ymd_opt(year, base.month(), base.day())
                else {
                    continue;
                };
                let text = if kinds.anniversary {
                    format!("{text} ({})", year_suffix(year - base.year(), lang))
                } else {
                    text.to_owned()
                };
                out.push(Event { date, kinds, text });
            }
        }
    }
}

/// Easter Sunday of `year` in the Gregorian calendar.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = (19 * a + b - b / 4 - ((b - (b + 8) / 25 + 1) / 3) + 15) % 30;
    let e = (32 + 2 * (b % 4) + 2 * (c / 4) - d - (c % 4)) % 7;
    let f = d + e - 7 * ((a + 11 * d + 22 * e) / 451) + 114;
    let month = f / 31;
    let day = f % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn parse_kinds(raw: &str) -> EventKinds {
    let mut kinds = EventKinds::default();
    for c in raw.chars() {
        match c.to_ascii_lowercase() {
            'd' => kinds.anniversary = true,
            'g' => kinds.generic = true,
            'm' => kinds.day_off = true,
            '=' => kinds.non_recurring = true,
            _ => {}
        }
    }
    // An anniversary is already a dated entry; the generic flag adds nothing.
    if kinds.anniversary {
        kinds.generic = false;
    }
    kinds
}

/// `EASTER`, `EASTER+N` or `EASTER-N` (any case), as a day offset.
fn parse_easter_offset(field: &str) -> Option<i64> {
    let lower = field.to_ascii_lowercase();
    let rest = lower.strip_prefix("easter")?;
    if rest.is_empty() {
        return Some(0);
    }
    let sign = match rest.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = &rest[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

fn year_suffix(n: i32, lang: &str) -> String {
    let (one, many) = match lang {
        "da" => ("år", "år"),
        "de" => ("Jahre", "Jahren"),
        _ => ("year", "years"),
    };
    let word = if n == 1 { one } else { many };
    format!("{n} {word}")
}

#[cfg(test)]
#[path = "../../tests/unit/events/parse.rs"]
mod tests;
