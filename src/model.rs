use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use crate::calendar::parse_count;
use crate::calendar::sanitize_count;
use crate::solver::{StaffingResult, VacationSandwich};

/// Identifiant fort pour une rotation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationId(String);

impl RotationId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Statut d'un jour : travaillé (T), saliente (S) ou libre (L).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DayStatus {
    Work,
    /// Premier jour de repos après un bloc travaillé (repos partiel).
    Transitional,
    Rest,
}

impl DayStatus {
    /// Code court utilisé dans les exports et le motif.
    pub fn code(self) -> char {
        match self {
            DayStatus::Work => 'T',
            DayStatus::Transitional => 'S',
            DayStatus::Rest => 'L',
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rotation travail/repos à évaluer.
///
/// `rest_days` compte **tous** les jours de repos du cycle, saliente comprise.
/// Les compteurs sont tolérants à la désérialisation : valeurs négatives,
/// non numériques ou absentes => 0, fractions tronquées.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationConfig {
    #[cfg_attr(feature = "serde", serde(default = "RotationId::random"))]
    pub id: RotationId,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_count")
    )]
    pub work_days: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_count")
    )]
    pub rest_days: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_count")
    )]
    pub nights_per_cycle: u32,
}

impl RotationConfig {
    pub fn new(work_days: u32, rest_days: u32, nights_per_cycle: u32) -> Self {
        Self {
            id: RotationId::random(),
            name: None,
            work_days,
            rest_days,
            nights_per_cycle: nights_per_cycle.min(work_days),
        }
    }

    /// Construit une rotation à partir de valeurs brutes (saisie libre).
    pub fn from_raw(work_days: f64, rest_days: f64, nights_per_cycle: f64) -> Self {
        Self::new(
            sanitize_count(work_days),
            sanitize_count(rest_days),
            sanitize_count(nights_per_cycle),
        )
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: RotationId) -> Self {
        self.id = id;
        self
    }

    pub fn cycle_length(&self) -> u32 {
        self.work_days.saturating_add(self.rest_days)
    }

    /// Nuits par cycle, bornées par le nombre de jours travaillés.
    pub fn nights(&self) -> u32 {
        self.nights_per_cycle.min(self.work_days)
    }

    /// Jours libres complets par cycle (hors saliente).
    pub fn clean_rest_days(&self) -> u32 {
        self.rest_days.saturating_sub(1)
    }

    /// Motif canonique, ex. `6 (2N) - S - 2`.
    pub fn pattern(&self) -> String {
        format!(
            "{} ({}N) - S - {}",
            self.work_days,
            self.nights(),
            self.clean_rest_days()
        )
    }

    /// Libellé d'affichage : le nom s'il existe, sinon le motif.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.pattern(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(f64),
    Text(String),
}

#[cfg(feature = "serde")]
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCount>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawCount::Number(n)) => sanitize_count(n),
        Some(RawCount::Text(s)) => parse_count(&s),
        None => 0,
    })
}

/// Jour de calendrier et son statut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Séquence générée et plage `[start, end]` pour laquelle elle l'a été.
///
/// `end` vaut `None` quand le 31 décembre de l'année n'est pas représentable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calendar {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub days: Vec<CalendarDay>,
}

impl Calendar {
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.end.is_some_and(|end| date >= self.start && date <= end)
    }

    /// Nombre de jours de la plage, indépendamment de la séquence générée.
    pub fn range_len(&self) -> usize {
        match self.end {
            Some(end) if end >= self.start => {
                (end.signed_duration_since(self.start).num_days() + 1) as usize
            }
            _ => 0,
        }
    }

    pub fn count(&self, status: DayStatus) -> usize {
        self.days.iter().filter(|d| d.status == status).count()
    }
}

/// Type de week-end complet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WeekendKind {
    /// L + L
    Clean,
    /// S + L
    TransitionalSaturday,
    /// L + S
    TransitionalSunday,
    /// S + S
    DoubleTransitional,
}

impl WeekendKind {
    pub fn is_transitional(self) -> bool {
        !matches!(self, WeekendKind::Clean)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekendKind::Clean => "clean",
            WeekendKind::TransitionalSaturday => "transitional_saturday",
            WeekendKind::TransitionalSunday => "transitional_sunday",
            WeekendKind::DoubleTransitional => "double_transitional",
        }
    }
}

/// Un samedi/dimanche entièrement inclus dans la plage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekendRecord {
    pub saturday: NaiveDate,
    pub saturday_status: DayStatus,
    pub sunday_status: DayStatus,
    pub kind: Option<WeekendKind>,
    pub is_full: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekendAggregate {
    pub total_weekends: usize,
    pub full_weekends: usize,
    pub clean_weekends: usize,
    pub transitional_weekends: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub details: Vec<WeekendRecord>,
}

/// Résultat complet pour une rotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisResult {
    pub id: RotationId,
    pub rotation_name: String,
    pub pattern: String,
    pub cycle_length: u32,
    pub work_days: usize,
    pub transitional_days: usize,
    pub rest_days: usize,
    pub total_rest_days: usize,
    pub total_nights: usize,
    pub weekends: WeekendAggregate,
    pub vacation: VacationSandwich,
    pub staffing: StaffingResult,
}
