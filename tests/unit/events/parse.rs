use super::*;

fn parsed(content: &str, lang: &str) -> Vec<Event> {
    let mut out = Vec::new();
    parse_events(content, "test", lang, &mut out);
    out
}

#[test]
fn non_recurring_line_yields_a_single_event() {
    let events = parsed("2026-08-25; g=; Dentist", "en");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2026, 8, 25).unwrap());
    assert!(events[0].kinds.generic);
    assert!(events[0].kinds.non_recurring);
    assert_eq!(events[0].text, "Dentist");
}

#[test]
fn recurring_event_expands_to_the_last_year() {
    let events = parsed("2026-08-25; g; Dentist", "en");
    assert_eq!(events.len(), (MAX_YEAR - 2026 + 1) as usize);
    assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2026, 8, 25).unwrap());
    let last = events.last().unwrap();
    assert_eq!(last.date, NaiveDate::from_ymd_opt(MAX_YEAR, 8, 25).unwrap());
    assert_eq!(last.text, "Dentist");
}

#[test]
fn expansion_starts_no_earlier_than_the_first_year() {
    let events = parsed("1960-06-15; d; Wedding", "en");
    assert_eq!(events.len(), (MAX_YEAR - MIN_YEAR + 1) as usize);
    assert_eq!(events[0].date, NaiveDate::from_ymd_opt(MIN_YEAR, 6, 15).unwrap());
    assert_eq!(events[0].text, "Wedding (20 years)");
}

#[test]
fn anniversaries_carry_a_year_count() {
    let events = parsed("2024-03-01; d; Noah", "en");
    assert_eq!(events[0].text, "Noah (0 years)");
    assert_eq!(events[1].text, "Noah (1 year)");
    assert_eq!(events[2].text, "Noah (2 years)");
    assert!(events[0].kinds.anniversary);
    assert!(!events[0].kinds.generic);
}

#[test]
fn anniversary_suffix_is_localized() {
    let da = parsed("2025-03-01; d; Ida", "da");
    assert_eq!(da[0].text, "Ida (0 år)");
    assert_eq!(da[1].text, "Ida (1 år)");
    let de = parsed("2025-03-01; d; Ida", "de");
    assert_eq!(de[0].text, "Ida (0 Jahren)");
    assert_eq!(de[1].text, "Ida (1 Jahre)");
    assert_eq!(de[2].text, "Ida (2 Jahren)");
}

#[test]
fn sentinel_year_recurs_without_a_count() {
    let events = parsed("8888-05-01; m; May Day", "en");
    assert_eq!(events.len(), (MAX_YEAR - MIN_YEAR + 1) as usize);
    assert_eq!(events[0].date, NaiveDate::from_ymd_opt(MIN_YEAR, 5, 1).unwrap());
    assert!(events.iter().all(|event| event.text == "May Day"));
    assert!(events.iter().all(|event| event.kinds.day_off));
    assert!(events.iter().all(|event| event.kinds.non_recurring));
}

#[test]
fn sentinel_leap_day_skips_non_leap_years() {
    let events = parsed("8888-02-29; g; Leap", "en");
    assert_eq!(events.len(), 30);
    assert!(events.iter().any(|event| event.date.year() == 2024));
    assert!(events.iter().all(|event| event.date.year() != 2026));
    assert!(events.iter().all(|event| event.date.year() != 2100));
}

#[test]
fn easter_dates_shift_every_year() {
    let events = parsed("EASTER-2; m; Good Friday", "en");
    assert_eq!(events.len(), (MAX_YEAR - MIN_YEAR + 1) as usize);
    let in_2026 = events.iter().find(|event| event.date.year() == 2026).unwrap();
    assert_eq!(in_2026.date, NaiveDate::from_ymd_opt(2026, 4, 3).unwrap());
    assert!(in_2026.kinds.day_off);
    assert!(in_2026.kinds.non_recurring);
}

#[test]
fn easter_instances_never_count_anniversaries() {
    let events = parsed("EASTER; d; Easter", "en");
    let in_2026 = events.iter().find(|event| event.date.year() == 2026).unwrap();
    assert_eq!(in_2026.text, "Easter");
    assert!(!in_2026.kinds.anniversary);
    assert!(in_2026.kinds.non_recurring);
}

#[test]
fn easter_sunday_matches_known_dates() {
    assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
    assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
    assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5));
    assert_eq!(easter_sunday(1980), NaiveDate::from_ymd_opt(1980, 4, 6));
}

#[test]
fn anniversary_letter_supersedes_generic() {
    let kinds = parse_kinds("gd");
    assert!(kinds.anniversary);
    assert!(!kinds.generic);
    let kinds = parse_kinds("M=");
    assert!(kinds.day_off);
    assert!(kinds.non_recurring);
}

#[test]
fn malformed_lines_are_skipped() {
    let content = "\
# birthdays
2026-08-25; g
2026-08-25; x; no known type
2026-13-01; g; bad month
 ; g; empty date

2026-08-25; g=; Keep";
    let events = parsed(content, "en");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].text, "Keep");
}

#[test]
fn easter_offsets_parse_with_sign_and_digits() {
    assert_eq!(parse_easter_offset("EASTER"), Some(0));
    assert_eq!(parse_easter_offset("easter+10"), Some(10));
    assert_eq!(parse_easter_offset("Easter-2"), Some(-2));
    assert_eq!(parse_easter_offset("easter2"), None);
    assert_eq!(parse_easter_offset("easter+"), None);
    assert_eq!(parse_easter_offset("easter+x"), None);
    assert_eq!(parse_easter_offset("2026-04-05"), None);
}
