use super::types::VacationSandwich;
use crate::model::RotationConfig;

/// Un bloc travaillé pris en congés relie le repos qui le précède à celui qui
/// le suit.
pub(super) fn vacation_sandwich(config: &RotationConfig) -> VacationSandwich {
    let vac = config.work_days;
    let prev = config.rest_days;
    let post = config.rest_days;
    let total = prev.saturating_add(vac).saturating_add(post);
    let factor = if vac > 0 {
        f64::from(total) / f64::from(vac)
    } else {
        0.0
    };
    VacationSandwich {
        prev,
        vac,
        post,
        total,
        factor,
    }
}
