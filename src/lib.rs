#![forbid(unsafe_code)]
//! Rotastat — analyse de rotations travail/repos sur une année civile.
//!
//! - Génération du calendrier T / S / L à partir d'un début de cycle.
//! - Classement des week-ends (complets, propres, avec saliente).
//! - Congés "sandwich" et effectif requis pour couvrir des postes fixes.
//! - Calcul pur et déterministe ; les entrées invalides donnent des résultats
//!   dégénérés (0, `Unachievable`), jamais d'erreur.

pub mod analysis;
pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
pub mod solver;
#[cfg(feature = "serde")]
pub mod storage;
pub mod study;
pub mod weekend;

pub use analysis::{analyze, best_rotation, Analyzer, BaselineDelta};
pub use calendar::{generate, parse_count, sanitize_count, CycleTemplate};
pub use model::{
    AnalysisResult, Calendar, CalendarDay, DayStatus, RotationConfig, RotationId,
    WeekendAggregate, WeekendKind, WeekendRecord,
};
pub use report::{render_report, ResultRenderer, TextReport};
pub use solver::{
    solve, CoveragePolicy, LimitingFactor, Solution, StaffingResult, VacationSandwich,
    MAX_BACKUP_FACTOR,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
pub use study::{Study, StudyError};
pub use weekend::{classify, classify_with, weekend_kind, WeekendPolicy};
