mod staffing;
mod types;
mod vacation;

pub use staffing::CALENDAR_DAYS;
pub use types::{CoveragePolicy, MAX_BACKUP_FACTOR, LimitingFactor, StaffingResult, VacationSandwich};

use crate::model::RotationConfig;

/// Sortie du solveur pour une rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub vacation: VacationSandwich,
    pub staffing: StaffingResult,
    /// Nuits estimées sur la plage, au prorata des jours travaillés.
    pub total_nights: usize,
}

/// Calcule congés, effectif requis et nuits estimées.
///
/// Ne renvoie jamais d'erreur : les cas dégénérés donnent 0 ou
/// [`LimitingFactor::Unachievable`].
pub fn solve(
    config: &RotationConfig,
    work_day_count: usize,
    cycle_length: u32,
    policy: &CoveragePolicy,
) -> Solution {
    Solution {
        vacation: vacation::vacation_sandwich(config),
        staffing: staffing::staffing(config, cycle_length, policy),
        total_nights: estimated_nights(config, work_day_count),
    }
}

fn estimated_nights(config: &RotationConfig, work_day_count: usize) -> usize {
    if config.work_days == 0 {
        return 0;
    }
    let ratio = f64::from(config.nights()) / f64::from(config.work_days);
    (work_day_count as f64 * ratio).round() as usize
}
