use crate::calendar;
use crate::model::{AnalysisResult, DayStatus, RotationConfig};
use crate::solver::{self, CoveragePolicy};
use crate::weekend::{self, WeekendPolicy};
use chrono::NaiveDate;

/// Analyse d'une rotation pour une année et une date de début de cycle,
/// avec les politiques par défaut.
pub fn analyze(config: &RotationConfig, year: i32, start: NaiveDate) -> AnalysisResult {
    Analyzer::new(year, start).analyze(config)
}

/// Contexte partagé par toutes les rotations d'une étude.
#[derive(Debug, Clone)]
pub struct Analyzer {
    year: i32,
    start: NaiveDate,
    coverage: CoveragePolicy,
    weekend_policy: WeekendPolicy,
}

impl Analyzer {
    pub fn new(year: i32, start: NaiveDate) -> Self {
        Self {
            year,
            start,
            coverage: CoveragePolicy::default(),
            weekend_policy: WeekendPolicy::default(),
        }
    }

    pub fn with_coverage(mut self, coverage: CoveragePolicy) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.weekend_policy = policy;
        self
    }

    /// Calendrier, week-ends puis solveur ; toujours un résultat complet.
    pub fn analyze(&self, config: &RotationConfig) -> AnalysisResult {
        let cal = calendar::generate(config.work_days, config.rest_days, self.start, self.year);
        let weekends = weekend::classify_with(&cal, self.weekend_policy);

        let work_days = cal.count(DayStatus::Work);
        let transitional_days = cal.count(DayStatus::Transitional);
        let rest_days = cal.count(DayStatus::Rest);
        let cycle_length = config.cycle_length();

        let solution = solver::solve(config, work_days, cycle_length, &self.coverage);

        #[cfg(feature = "logging")]
        tracing::debug!(
            rotation = config.id.as_str(),
            days = cal.len(),
            full_weekends = weekends.full_weekends,
            headcount = solution.staffing.required_headcount,
            limiting = solution.staffing.limiting_factor.as_str(),
            "rotation analysed"
        );

        AnalysisResult {
            id: config.id.clone(),
            rotation_name: config.label(),
            pattern: config.pattern(),
            cycle_length,
            work_days,
            transitional_days,
            rest_days,
            total_rest_days: transitional_days + rest_days,
            total_nights: solution.total_nights,
            weekends,
            vacation: solution.vacation,
            staffing: solution.staffing,
        }
    }

    pub fn analyze_all(&self, configs: &[RotationConfig]) -> Vec<AnalysisResult> {
        configs.iter().map(|c| self.analyze(c)).collect()
    }
}

/// Rotation offrant le plus de week-ends complets ; à égalité, la dernière.
pub fn best_rotation(results: &[AnalysisResult]) -> Option<&AnalysisResult> {
    results.iter().max_by_key(|r| r.weekends.full_weekends)
}

/// Écarts d'un résultat par rapport à la rotation de référence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineDelta {
    pub full_weekends: i64,
    pub work_days: i64,
    /// `None` si l'une des deux rotations ne peut pas couvrir les nuits.
    pub headcount: Option<i64>,
}

impl BaselineDelta {
    pub fn between(baseline: &AnalysisResult, current: &AnalysisResult) -> Self {
        let headcount = baseline
            .staffing
            .headcount()
            .zip(current.staffing.headcount())
            .map(|(b, c)| i64::from(c) - i64::from(b));
        Self {
            full_weekends: current.weekends.full_weekends as i64
                - baseline.weekends.full_weekends as i64,
            work_days: current.work_days as i64 - baseline.work_days as i64,
            headcount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.full_weekends == 0 && self.work_days == 0 && self.headcount.unwrap_or(0) == 0
    }
}
