#![forbid(unsafe_code)]
use chrono::NaiveDate;
use rotastat::{generate, DayStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_year_counts_for_six_three() {
    let cal = generate(6, 3, date(2025, 1, 1), 2025);
    assert_eq!(cal.len(), 365);
    // 40 cycles complets + 5 jours travaillés
    assert_eq!(cal.count(DayStatus::Work), 245);
    assert_eq!(cal.count(DayStatus::Transitional), 40);
    assert_eq!(cal.count(DayStatus::Rest), 80);
}

#[test]
fn leap_year_has_one_more_day() {
    let cal = generate(6, 3, date(2024, 1, 1), 2024);
    assert_eq!(cal.len(), 366);
    assert_eq!(cal.count(DayStatus::Work), 246);
}

#[test]
fn each_cycle_has_expected_composition() {
    for work in 1..=7u32 {
        for rest in 0..=5u32 {
            let cal = generate(work, rest, date(2025, 1, 1), 2025);
            let cycle = (work + rest) as usize;
            for chunk in cal.days().chunks_exact(cycle) {
                let count = |s: DayStatus| chunk.iter().filter(|d| d.status == s).count();
                assert_eq!(count(DayStatus::Work), work as usize);
                assert_eq!(count(DayStatus::Transitional), usize::from(rest > 0));
                assert_eq!(count(DayStatus::Rest), rest.saturating_sub(1) as usize);
            }
            let total = cal.count(DayStatus::Work)
                + cal.count(DayStatus::Transitional)
                + cal.count(DayStatus::Rest);
            assert_eq!(total, cal.range_len());
        }
    }
}

#[test]
fn starts_with_work_block_then_transitional() {
    let cal = generate(2, 3, date(2025, 3, 10), 2025);
    let statuses: Vec<_> = cal.days().iter().take(6).map(|d| d.status).collect();
    use DayStatus::*;
    assert_eq!(statuses, vec![Work, Work, Transitional, Rest, Rest, Work]);
    assert_eq!(cal.days()[0].date, date(2025, 3, 10));
    assert_eq!(cal.days().last().unwrap().date, date(2025, 12, 31));
}

#[test]
fn zero_cycle_is_empty_but_keeps_range() {
    let cal = generate(0, 0, date(2025, 1, 1), 2025);
    assert!(cal.is_empty());
    assert_eq!(cal.range_len(), 365);
}

#[test]
fn start_after_year_end_is_empty() {
    let cal = generate(6, 3, date(2026, 1, 1), 2025);
    assert!(cal.is_empty());
    assert_eq!(cal.range_len(), 0);
}

#[test]
fn start_on_last_day() {
    let cal = generate(1, 1, date(2025, 12, 31), 2025);
    assert_eq!(cal.len(), 1);
    assert_eq!(cal.days()[0].status, DayStatus::Work);
}

#[test]
fn generation_is_deterministic() {
    let a = generate(5, 3, date(2025, 2, 14), 2025);
    let b = generate(5, 3, date(2025, 2, 14), 2025);
    assert_eq!(a, b);
}
