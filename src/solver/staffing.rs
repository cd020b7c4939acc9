use super::types::{CoveragePolicy, LimitingFactor, StaffingResult};
use crate::model::RotationConfig;

/// Année de référence pour la demande et la capacité.
pub const CALENDAR_DAYS: f64 = 365.0;

pub(super) fn staffing(
    config: &RotationConfig,
    cycle_length: u32,
    policy: &CoveragePolicy,
) -> StaffingResult {
    let work = f64::from(config.work_days);
    let nights = f64::from(config.nights());
    let vacation = f64::from(policy.vacation_shifts);
    let backup = policy.effective_backup();

    let demand_total = f64::from(policy.total_posts()) * CALENDAR_DAYS;
    let demand_nights = f64::from(policy.night_posts) * CALENDAR_DAYS;

    let cycles_per_year = if cycle_length > 0 {
        CALENDAR_DAYS / f64::from(cycle_length)
    } else {
        0.0
    };
    let gross_work = cycles_per_year * work;
    let gross_nights = cycles_per_year * nights;

    // Les congés rognent les nuits au prorata de leur part dans le bloc.
    let night_ratio = if work > 0.0 { nights / work } else { 0.0 };
    let effective_work_days = (gross_work - vacation).max(0.0);
    let effective_nights = (gross_nights - vacation * night_ratio).max(0.0);

    let volume = if effective_work_days > 0.0 {
        demand_total / effective_work_days * backup
    } else {
        0.0
    };

    let min_staff_for_nights = if demand_nights == 0.0 {
        Some(0.0)
    } else if config.nights() == 0 || effective_nights <= 0.0 {
        None
    } else {
        Some(demand_nights / effective_nights * backup).filter(|n| headcount_fits(*n))
    };

    // Une estimation hors de portée d'un effectif n'est pas une réponse.
    let volume_fits = headcount_fits(volume);
    let min_staff_for_volume = if volume_fits { volume } else { 0.0 };

    let (required_headcount, limiting_factor) = match min_staff_for_nights {
        _ if !volume_fits => (0, LimitingFactor::Unachievable),
        None => (0, LimitingFactor::Unachievable),
        Some(n) if n > min_staff_for_volume => (ceil_count(n), LimitingFactor::NightCoverage),
        Some(_) => (ceil_count(min_staff_for_volume), LimitingFactor::Volume),
    };

    StaffingResult {
        required_headcount,
        limiting_factor,
        min_staff_for_volume,
        min_staff_for_nights,
        effective_work_days,
        effective_nights,
    }
}

fn headcount_fits(value: f64) -> bool {
    value.is_finite() && value.ceil() <= f64::from(u32::MAX)
}

fn ceil_count(value: f64) -> u32 {
    value.ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cycle_degrades_to_zero_volume() {
        let cfg = RotationConfig::new(0, 0, 0);
        let policy = CoveragePolicy {
            night_posts: 0,
            ..CoveragePolicy::default()
        };
        let res = staffing(&cfg, 0, &policy);
        assert_eq!(res.limiting_factor, LimitingFactor::Volume);
        assert_eq!(res.required_headcount, 0);
        assert_eq!(res.effective_work_days, 0.0);
        assert_eq!(res.effective_nights, 0.0);
    }

    #[test]
    fn vacation_exhausting_nights_is_unachievable() {
        // 1 nuit par cycle de 30 jours : ~12 nuits/an, rongées par les congés.
        let cfg = RotationConfig::new(2, 28, 1);
        let policy = CoveragePolicy {
            vacation_shifts: 200,
            ..CoveragePolicy::default()
        };
        let res = staffing(&cfg, cfg.cycle_length(), &policy);
        assert_eq!(res.limiting_factor, LimitingFactor::Unachievable);
        assert_eq!(res.min_staff_for_nights, None);
        assert!(!res.min_staff_for_volume.is_nan());
    }

    #[test]
    fn unreachable_volume_is_unachievable() {
        let cfg = RotationConfig::new(6, 3, 2);
        let policy = CoveragePolicy {
            day_posts: u32::MAX,
            night_posts: 0,
            guard_posts: u32::MAX,
            vacation_shifts: 243,
            backup_factor: 1.0,
        };
        // ~0.33 jour effectif par personne face à des milliards de postes
        let res = staffing(&cfg, 9, &policy);
        assert_eq!(res.limiting_factor, LimitingFactor::Unachievable);
        assert_eq!(res.required_headcount, 0);
        assert_eq!(res.min_staff_for_volume, 0.0);
    }

    #[test]
    fn invalid_backup_counts_as_one() {
        let cfg = RotationConfig::new(6, 3, 2);
        let strict = CoveragePolicy {
            backup_factor: 1.0,
            ..CoveragePolicy::default()
        };
        let broken = CoveragePolicy {
            backup_factor: f64::NAN,
            ..CoveragePolicy::default()
        };
        assert_eq!(
            staffing(&cfg, 9, &strict),
            staffing(&cfg, 9, &broken)
        );
    }
}
