#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rotastat::{
    io,
    model::{RotationConfig, RotationId},
    report::{render_report, TextReport},
    storage::{JsonStorage, Storage},
    study::Study,
    weekend::WeekendPolicy,
    LimitingFactor,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI d'analyse de rotations travail/repos
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'étude
    #[arg(long, global = true, default_value = "study.json")]
    study: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Créer une étude avec les rotations par défaut
    Init {
        /// Année analysée (par défaut : l'année prochaine)
        #[arg(long)]
        year: Option<i32>,
        /// Premier jour travaillé du cycle, AAAA-MM-JJ (par défaut : 1er janvier)
        #[arg(long)]
        start: Option<String>,
        /// Écrase une étude existante
        #[arg(long)]
        force: bool,
    },

    /// Ajouter une rotation
    AddRotation {
        #[arg(long)]
        name: String,
        /// Jours travaillés consécutifs
        #[arg(long)]
        work: String,
        /// Jours de repos, saliente comprise
        #[arg(long)]
        rest: String,
        /// Nuits par bloc travaillé
        #[arg(long, default_value = "0")]
        nights: String,
    },

    /// Supprimer une rotation
    RemoveRotation {
        #[arg(long)]
        id: String,
    },

    /// Importer des rotations depuis un CSV
    ImportRotations {
        #[arg(long)]
        csv: String,
    },

    /// Modifier la politique de couverture
    SetCoverage {
        #[arg(long)]
        day_posts: Option<u32>,
        #[arg(long)]
        night_posts: Option<u32>,
        #[arg(long)]
        guard_posts: Option<u32>,
        /// Congés annuels en jours de service
        #[arg(long)]
        vacation_shifts: Option<u32>,
        #[arg(long)]
        backup_factor: Option<f64>,
    },

    /// Analyser toutes les rotations et exporter optionnellement
    Analyze {
        /// Ne compter que les week-ends L+L
        #[arg(long)]
        clean_only: bool,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Détail des week-ends d'une rotation
    Weekends {
        #[arg(long)]
        id: String,
        #[arg(long)]
        clean_only: bool,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.study)?;

    let code = match cli.cmd {
        Commands::Init { year, start, force } => {
            if storage.exists() && !force {
                bail!(
                    "{} existe déjà (utiliser --force pour écraser)",
                    storage.path().display()
                );
            }
            let year = year.unwrap_or_else(|| Utc::now().year() + 1);
            let mut study = Study::for_year(year)?.with_default_rotations();
            if let Some(start) = start {
                study.start_date = parse_date(&start)?;
            }
            storage.save(&study)?;
            for r in &study.rotations {
                println!("{} | {} | {}", r.id.as_str(), r.label(), r.pattern());
            }
            0
        }
        Commands::AddRotation {
            name,
            work,
            rest,
            nights,
        } => {
            let mut study = load_study(&storage)?;
            let rotation = RotationConfig::new(
                rotastat::parse_count(&work),
                rotastat::parse_count(&rest),
                rotastat::parse_count(&nights),
            )
            .with_name(name);
            let id = study.add_rotation(rotation)?;
            storage.save(&study)?;
            println!("{}", id.as_str());
            0
        }
        Commands::RemoveRotation { id } => {
            let mut study = load_study(&storage)?;
            let removed = study.remove_rotation(&RotationId::new(id))?;
            storage.save(&study)?;
            println!("removed {}", removed.label());
            0
        }
        Commands::ImportRotations { csv } => {
            let mut study = load_study(&storage)?;
            let rotations = io::import_rotations_csv(csv)?;
            let n = rotations.len();
            for r in rotations {
                study.add_rotation(r)?;
            }
            storage.save(&study)?;
            println!("imported {n} rotation(s)");
            0
        }
        Commands::SetCoverage {
            day_posts,
            night_posts,
            guard_posts,
            vacation_shifts,
            backup_factor,
        } => {
            let mut study = load_study(&storage)?;
            let mut coverage = study.coverage;
            if let Some(v) = day_posts {
                coverage.day_posts = v;
            }
            if let Some(v) = night_posts {
                coverage.night_posts = v;
            }
            if let Some(v) = guard_posts {
                coverage.guard_posts = v;
            }
            if let Some(v) = vacation_shifts {
                coverage.vacation_shifts = v;
            }
            if let Some(v) = backup_factor {
                coverage.backup_factor = v;
            }
            study.set_coverage(coverage)?;
            storage.save(&study)?;
            0
        }
        Commands::Analyze {
            clean_only,
            out_json,
            out_csv,
        } => {
            let mut study = load_study(&storage)?;
            if clean_only {
                study.weekend_policy = WeekendPolicy::CleanOnly;
            }
            let results = study.analyze();
            if let Some(path) = out_json {
                io::export_results_json(path, &results)?;
            }
            if let Some(path) = out_csv {
                io::export_results_csv(path, &results)?;
            }
            print!("{}", render_report(&results, &TextReport));
            let uncovered = results
                .iter()
                .filter(|r| r.staffing.limiting_factor == LimitingFactor::Unachievable)
                .count();
            if uncovered > 0 {
                eprintln!("{uncovered} rotation(s) ne couvrent pas les nuits");
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                0
            }
        }
        Commands::Weekends {
            id,
            clean_only,
            out_csv,
        } => {
            let mut study = load_study(&storage)?;
            if clean_only {
                study.weekend_policy = WeekendPolicy::CleanOnly;
            }
            let rid = RotationId::new(&id);
            let rotation = study
                .find_rotation(&rid)
                .ok_or_else(|| anyhow::anyhow!("unknown rotation: {}", id))?;
            let result = study.analyzer().analyze(rotation);
            if let Some(path) = out_csv {
                io::export_weekends_csv(path, &result.weekends.details)?;
            }
            for w in &result.weekends.details {
                println!(
                    "{} | {}{} | {} | {}",
                    w.saturday.format("%d/%m/%Y"),
                    w.saturday_status,
                    w.sunday_status,
                    w.kind.map(|k| k.as_str()).unwrap_or("-"),
                    if w.is_full { "complet" } else { "partiel" }
                );
            }
            println!(
                "{}/{} week-ends complets",
                result.weekends.full_weekends, result.weekends.total_weekends
            );
            0
        }
    };

    std::process::exit(code);
}

fn load_study(storage: &JsonStorage) -> Result<Study> {
    storage.load().with_context(|| {
        format!(
            "no usable study at {} (run `init` first)",
            storage.path().display()
        )
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date: {raw}"))
}
