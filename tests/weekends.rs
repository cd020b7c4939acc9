#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use rotastat::{classify, classify_with, generate, DayStatus, WeekendKind, WeekendPolicy};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn aligned_five_two_gives_transitional_weekends() {
    // lundi 6 janvier : lun-ven T, sam S, dim L
    let agg = classify(&generate(5, 2, date(2025, 1, 6), 2025));
    assert_eq!(agg.total_weekends, 51);
    assert_eq!(agg.full_weekends, 51);
    assert_eq!(agg.clean_weekends, 0);
    assert_eq!(agg.transitional_weekends, 51);
    assert!(agg
        .details
        .iter()
        .all(|w| w.kind == Some(WeekendKind::TransitionalSaturday)));
}

#[test]
fn aligned_four_three_gives_clean_weekends() {
    // lun-jeu T, ven S, sam + dim L
    let agg = classify(&generate(4, 3, date(2025, 1, 6), 2025));
    assert_eq!(agg.full_weekends, 51);
    assert_eq!(agg.clean_weekends, 51);
    assert_eq!(agg.transitional_weekends, 0);
}

#[test]
fn only_transitional_days_count_as_double() {
    let agg = classify(&generate(0, 1, date(2025, 1, 1), 2025));
    assert_eq!(agg.total_weekends, 52);
    assert_eq!(agg.full_weekends, 52);
    assert!(agg
        .details
        .iter()
        .all(|w| w.kind == Some(WeekendKind::DoubleTransitional)));
}

#[test]
fn clean_only_policy_ignores_transitional_pairs() {
    let cal = generate(5, 2, date(2025, 1, 6), 2025);
    let agg = classify_with(&cal, WeekendPolicy::CleanOnly);
    assert_eq!(agg.total_weekends, 51);
    assert_eq!(agg.full_weekends, 0);
    assert_eq!(agg.transitional_weekends, 0);
    // le type reste renseigné pour l'affichage
    assert!(agg.details.iter().all(|w| w.kind.is_some() && !w.is_full));
}

#[test]
fn six_three_mixes_both_kinds() {
    let cal = generate(6, 3, date(2025, 1, 1), 2025);
    let agg = classify(&cal);
    assert_eq!(agg.total_weekends, 52);
    assert_eq!(agg.full_weekends, 11);
    assert_eq!(agg.clean_weekends, 5);
    assert_eq!(agg.transitional_weekends, 6);
    assert_eq!(classify_with(&cal, WeekendPolicy::CleanOnly).full_weekends, 5);
}

#[test]
fn aggregate_invariants_hold() {
    for (work, rest) in [(6, 3), (5, 3), (6, 4), (1, 1), (2, 5), (7, 7), (3, 0)] {
        for month in 1..=12 {
            let agg = classify(&generate(work, rest, date(2025, month, 3), 2025));
            assert_eq!(agg.full_weekends, agg.clean_weekends + agg.transitional_weekends);
            assert!(agg.full_weekends <= agg.total_weekends);
            assert!(agg.total_weekends <= 53);
            assert_eq!(agg.total_weekends, agg.details.len());
        }
    }
}

#[test]
fn records_are_saturdays_inside_range() {
    let agg = classify(&generate(6, 3, date(2025, 1, 1), 2025));
    for w in &agg.details {
        assert_eq!(w.saturday.weekday(), Weekday::Sat);
        assert!(w.saturday < date(2025, 12, 31));
    }
    assert_eq!(agg.details[0].saturday, date(2025, 1, 4));
    assert_eq!(agg.details.last().unwrap().saturday, date(2025, 12, 27));
}

#[test]
fn saturday_on_last_day_is_skipped() {
    // 31/12/2022 est un samedi : son dimanche tombe hors plage
    let agg = classify(&generate(1, 1, date(2022, 12, 30), 2022));
    assert_eq!(agg.total_weekends, 0);
}

#[test]
fn missing_days_count_as_work() {
    let agg = classify(&generate(0, 0, date(2025, 1, 1), 2025));
    assert_eq!(agg.total_weekends, 52);
    assert_eq!(agg.full_weekends, 0);
    assert!(agg
        .details
        .iter()
        .all(|w| w.saturday_status == DayStatus::Work && w.sunday_status == DayStatus::Work));
}

#[test]
fn start_after_year_end_has_no_weekend() {
    let agg = classify(&generate(6, 3, date(2026, 1, 1), 2025));
    assert_eq!(agg.total_weekends, 0);
    assert!(agg.details.is_empty());
}
