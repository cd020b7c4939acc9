use crate::analysis::Analyzer;
use crate::model::{AnalysisResult, RotationConfig, RotationId};
use crate::solver::CoveragePolicy;
use crate::weekend::WeekendPolicy;
use anyhow::{bail, Result};
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("invalid year: {0}")]
    InvalidYear(i32),
    #[error("unknown rotation: {0}")]
    UnknownRotation(String),
    #[error("duplicate rotation id: {0}")]
    DuplicateRotation(String),
    #[error("invalid coverage policy: {0}")]
    InvalidCoverage(String),
}

/// Étude : une année, un début de cycle, une politique de couverture et les
/// rotations à comparer. La première rotation sert de référence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Study {
    pub year: i32,
    pub start_date: NaiveDate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub coverage: CoveragePolicy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weekend_policy: WeekendPolicy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotations: Vec<RotationConfig>,
}

impl Study {
    /// Étude vide démarrant le 1er janvier de `year`.
    pub fn for_year(year: i32) -> Result<Self, StudyError> {
        let start_date =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(StudyError::InvalidYear(year))?;
        Ok(Self {
            year,
            start_date,
            coverage: CoveragePolicy::default(),
            weekend_policy: WeekendPolicy::default(),
            rotations: Vec::new(),
        })
    }

    /// Rotations proposées par défaut : 6-3 (actuelle), 5-3 et 6-4.
    pub fn with_default_rotations(mut self) -> Self {
        self.rotations = vec![
            RotationConfig::new(6, 3, 2).with_name("Actuelle (6-3)"),
            RotationConfig::new(5, 3, 2).with_name("Option A (5-3)"),
            RotationConfig::new(6, 4, 2).with_name("Option B (6-4)"),
        ];
        self
    }

    pub fn validate(&self) -> Result<()> {
        if crate::calendar::year_end(self.year).is_none() {
            bail!("year {} is out of range", self.year);
        }
        self.coverage.validate()?;
        for (i, rot) in self.rotations.iter().enumerate() {
            if rot.id.as_str().trim().is_empty() {
                bail!("rotation id cannot be empty");
            }
            if self.rotations[..i].iter().any(|r| r.id == rot.id) {
                bail!("duplicate rotation id {}", rot.id.as_str());
            }
        }
        Ok(())
    }

    pub fn find_rotation(&self, id: &RotationId) -> Option<&RotationConfig> {
        self.rotations.iter().find(|r| &r.id == id)
    }

    pub fn add_rotation(&mut self, rotation: RotationConfig) -> Result<RotationId, StudyError> {
        if self.find_rotation(&rotation.id).is_some() {
            return Err(StudyError::DuplicateRotation(rotation.id.as_str().to_string()));
        }
        let id = rotation.id.clone();
        self.rotations.push(rotation);
        Ok(id)
    }

    pub fn remove_rotation(&mut self, id: &RotationId) -> Result<RotationConfig, StudyError> {
        let pos = self
            .rotations
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StudyError::UnknownRotation(id.as_str().to_string()))?;
        Ok(self.rotations.remove(pos))
    }

    /// Remplace la politique de couverture après validation.
    pub fn set_coverage(&mut self, coverage: CoveragePolicy) -> Result<(), StudyError> {
        coverage
            .validate()
            .map_err(|e| StudyError::InvalidCoverage(e.to_string()))?;
        self.coverage = coverage;
        Ok(())
    }

    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new(self.year, self.start_date)
            .with_coverage(self.coverage)
            .with_weekend_policy(self.weekend_policy)
    }

    pub fn analyze(&self) -> Vec<AnalysisResult> {
        self.analyzer().analyze_all(&self.rotations)
    }
}
