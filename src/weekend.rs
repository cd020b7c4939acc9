use crate::model::{Calendar, DayStatus, WeekendAggregate, WeekendKind, WeekendRecord};
use chrono::{Datelike, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Règle de comptage des week-ends complets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WeekendPolicy {
    /// Toute paire sans jour travaillé est complète (saliente acceptée).
    #[default]
    Permissive,
    /// Seule la paire L + L est complète.
    CleanOnly,
}

/// Classe un samedi/dimanche. `None` dès qu'un des deux jours est travaillé.
pub fn weekend_kind(saturday: DayStatus, sunday: DayStatus) -> Option<WeekendKind> {
    use DayStatus::*;
    match (saturday, sunday) {
        (Rest, Rest) => Some(WeekendKind::Clean),
        (Transitional, Rest) => Some(WeekendKind::TransitionalSaturday),
        (Rest, Transitional) => Some(WeekendKind::TransitionalSunday),
        (Transitional, Transitional) => Some(WeekendKind::DoubleTransitional),
        (Work, _) | (_, Work) => None,
    }
}

/// Parcourt la plage du calendrier et agrège les week-ends.
pub fn classify(calendar: &Calendar) -> WeekendAggregate {
    classify_with(calendar, WeekendPolicy::default())
}

pub fn classify_with(calendar: &Calendar, policy: WeekendPolicy) -> WeekendAggregate {
    let mut agg = WeekendAggregate::default();
    let Some(end) = calendar.end else {
        return agg;
    };

    let by_date: HashMap<NaiveDate, DayStatus> = calendar
        .days()
        .iter()
        .map(|d| (d.date, d.status))
        .collect();
    // Une date sans donnée n'est jamais considérée comme libre.
    let status_of = |date: NaiveDate| by_date.get(&date).copied().unwrap_or(DayStatus::Work);

    let mut current = calendar.start;
    while current <= end {
        if current.weekday() == Weekday::Sat {
            let Some(sunday) = current.succ_opt() else {
                break;
            };
            if calendar.contains(sunday) {
                let saturday_status = status_of(current);
                let sunday_status = status_of(sunday);
                let kind = weekend_kind(saturday_status, sunday_status);
                let is_full = match (kind, policy) {
                    (Some(_), WeekendPolicy::Permissive) => true,
                    (Some(k), WeekendPolicy::CleanOnly) => !k.is_transitional(),
                    (None, _) => false,
                };
                agg.details.push(WeekendRecord {
                    saturday: current,
                    saturday_status,
                    sunday_status,
                    kind,
                    is_full,
                });
            }
        }
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    agg.total_weekends = agg.details.len();
    for record in agg.details.iter().filter(|r| r.is_full) {
        agg.full_weekends += 1;
        match record.kind {
            Some(WeekendKind::Clean) => agg.clean_weekends += 1,
            Some(_) => agg.transitional_weekends += 1,
            None => {}
        }
    }
    agg
}
