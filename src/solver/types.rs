use anyhow::{bail, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marge maximale acceptée.
pub const MAX_BACKUP_FACTOR: f64 = 10.0;

/// Postes à couvrir en continu et hypothèses de disponibilité du personnel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CoveragePolicy {
    pub day_posts: u32,
    pub night_posts: u32,
    /// Postes partagés supplémentaires (gardes), peut valoir 0.
    pub guard_posts: u32,
    /// Congés annuels en jours de service (et non en jours calendaires).
    pub vacation_shifts: u32,
    /// Marge multiplicative >= 1 (maladie, imprévus).
    pub backup_factor: f64,
}

impl Default for CoveragePolicy {
    fn default() -> Self {
        Self {
            day_posts: 12,
            night_posts: 4,
            guard_posts: 2,
            vacation_shifts: 22,
            backup_factor: 1.05,
        }
    }
}

impl CoveragePolicy {
    pub fn total_posts(&self) -> u32 {
        self.day_posts
            .saturating_add(self.night_posts)
            .saturating_add(self.guard_posts)
    }

    /// Marge réellement appliquée : une valeur invalide compte pour 1, une
    /// valeur excessive est ramenée à [`MAX_BACKUP_FACTOR`].
    pub fn effective_backup(&self) -> f64 {
        if self.backup_factor.is_finite() && self.backup_factor >= 1.0 {
            self.backup_factor.min(MAX_BACKUP_FACTOR)
        } else {
            1.0
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.backup_factor.is_finite() {
            bail!("backup_factor must be a finite number");
        }
        if self.backup_factor < 1.0 {
            bail!("backup_factor must be >= 1 (got {})", self.backup_factor);
        }
        if self.backup_factor > MAX_BACKUP_FACTOR {
            bail!(
                "backup_factor must be <= {MAX_BACKUP_FACTOR} (got {})",
                self.backup_factor
            );
        }
        if self.total_posts() == 0 {
            bail!("coverage policy must define at least one post");
        }
        Ok(())
    }
}

/// Contrainte qui fixe l'effectif minimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LimitingFactor {
    Volume,
    NightCoverage,
    /// Nuits impossibles à couvrir avec cette rotation.
    Unachievable,
}

impl LimitingFactor {
    pub fn as_str(self) -> &'static str {
        match self {
            LimitingFactor::Volume => "volume",
            LimitingFactor::NightCoverage => "night_coverage",
            LimitingFactor::Unachievable => "unachievable",
        }
    }
}

/// Congés posés sur un bloc travaillé entier, encadré par deux blocs de repos.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VacationSandwich {
    pub prev: u32,
    pub vac: u32,
    pub post: u32,
    pub total: u32,
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaffingResult {
    /// 0 quand `limiting_factor` vaut `Unachievable` : ce n'est pas un effectif.
    pub required_headcount: u32,
    pub limiting_factor: LimitingFactor,
    pub min_staff_for_volume: f64,
    pub min_staff_for_nights: Option<f64>,
    pub effective_work_days: f64,
    pub effective_nights: f64,
}

impl StaffingResult {
    pub fn is_achievable(&self) -> bool {
        self.limiting_factor != LimitingFactor::Unachievable
    }

    /// Effectif à afficher, `None` si la couverture est impossible.
    pub fn headcount(&self) -> Option<u32> {
        self.is_achievable().then_some(self.required_headcount)
    }
}
