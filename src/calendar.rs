use crate::model::{Calendar, CalendarDay, DayStatus};
use chrono::NaiveDate;

/// Ramène une saisie brute à un compteur : NaN, infini ou négatif => 0,
/// fraction tronquée.
pub fn sanitize_count(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    raw.floor() as u32
}

/// Variante texte de [`sanitize_count`] ; une valeur non numérique vaut 0.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<f64>().map(sanitize_count).unwrap_or(0)
}

/// 31 décembre de l'année, si représentable.
pub fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// Motif d'un cycle : `work_days` x T, puis S et `rest_days - 1` x L.
///
/// Le motif n'est pas matérialisé : le statut d'une position se déduit des
/// deux compteurs, quelle que soit la longueur du cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTemplate {
    work_days: u32,
    rest_days: u32,
}

impl CycleTemplate {
    pub fn new(work_days: u32, rest_days: u32) -> Self {
        Self {
            work_days,
            rest_days,
        }
    }

    pub fn len(&self) -> u64 {
        u64::from(self.work_days) + u64::from(self.rest_days)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Statut à la position `pos` (prise modulo la longueur du cycle).
    pub fn status_at(&self, pos: u64) -> Option<DayStatus> {
        if self.is_empty() {
            return None;
        }
        let pos = pos % self.len();
        let work = u64::from(self.work_days);
        Some(if pos < work {
            DayStatus::Work
        } else if pos == work {
            DayStatus::Transitional
        } else {
            DayStatus::Rest
        })
    }

    pub fn to_vec(&self) -> Vec<DayStatus> {
        (0..self.len()).filter_map(|pos| self.status_at(pos)).collect()
    }
}

/// Génère le statut de chaque jour entre `start` et le 31/12 de `year` inclus.
///
/// Un cycle de longueur nulle donne une séquence vide ; la plage reste
/// renseignée pour que le classement des week-ends puisse la parcourir.
pub fn generate(work_days: u32, rest_days: u32, start: NaiveDate, year: i32) -> Calendar {
    let end = year_end(year);
    let mut calendar = Calendar {
        start,
        end,
        days: Vec::new(),
    };

    let template = CycleTemplate::new(work_days, rest_days);
    let Some(end) = end else {
        return calendar;
    };
    if template.is_empty() {
        return calendar;
    }

    calendar.days.reserve(calendar.range_len().min(366));
    let mut current = start;
    let mut day_index: u64 = 0;
    while current <= end {
        let Some(status) = template.status_at(day_index) else {
            break;
        };
        calendar.days.push(CalendarDay {
            date: current,
            status,
        });
        day_index += 1;
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    calendar
}
