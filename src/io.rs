use crate::calendar::parse_count;
use crate::model::{AnalysisResult, RotationConfig, WeekendRecord};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de rotations depuis CSV: header `name,work_days,rest_days[,nights]`.
///
/// Les compteurs sont tolérants (vide, négatif ou non numérique => 0).
pub fn import_rotations_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RotationConfig>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid rotation row {} (empty name)", line + 2);
        }
        let work = parse_count(rec.get(1).context("missing work_days")?);
        let rest = parse_count(rec.get(2).context("missing rest_days")?);
        let nights = rec.get(3).map(parse_count).unwrap_or(0);
        out.push(RotationConfig::new(work, rest, nights).with_name(name));
    }
    Ok(out)
}

/// Export JSON des résultats (jolie mise en forme)
pub fn export_results_json<P: AsRef<Path>>(
    path: P,
    results: &[AnalysisResult],
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(results)?;
    fs::write(path, s)?;
    Ok(())
}

const RESULTS_HEADER: [&str; 15] = [
    "id",
    "name",
    "pattern",
    "cycle_length",
    "work_days",
    "transitional_days",
    "rest_days",
    "full_weekends",
    "clean_weekends",
    "transitional_weekends",
    "total_weekends",
    "vacation_total",
    "vacation_factor",
    "required_headcount",
    "limiting_factor",
];

/// Export CSV d'une ligne par rotation.
pub fn export_results_csv<P: AsRef<Path>>(
    path: P,
    results: &[AnalysisResult],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(RESULTS_HEADER)?;
    for r in results {
        // Effectif vide quand la couverture est impossible, jamais 0.
        let headcount = r.staffing.headcount().map(int).unwrap_or_default();
        w.write_record([
            r.id.as_str().to_owned(),
            r.rotation_name.clone(),
            r.pattern.clone(),
            int(r.cycle_length),
            int(r.work_days),
            int(r.transitional_days),
            int(r.rest_days),
            int(r.weekends.full_weekends),
            int(r.weekends.clean_weekends),
            int(r.weekends.transitional_weekends),
            int(r.weekends.total_weekends),
            int(r.vacation.total),
            format!("{:.2}", r.vacation.factor),
            headcount,
            r.staffing.limiting_factor.as_str().to_owned(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV du détail des week-ends: header `saturday,saturday_status,sunday_status,kind,full`
pub fn export_weekends_csv<P: AsRef<Path>>(
    path: P,
    records: &[WeekendRecord],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["saturday", "saturday_status", "sunday_status", "kind", "full"])?;
    for rec in records {
        let saturday = rec.saturday.format("%Y-%m-%d").to_string();
        let sat = rec.saturday_status.code().to_string();
        let sun = rec.sunday_status.code().to_string();
        w.write_record([
            saturday.as_str(),
            sat.as_str(),
            sun.as_str(),
            rec.kind.map(|k| k.as_str()).unwrap_or(""),
            if rec.is_full { "true" } else { "false" },
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn int<I: itoa::Integer>(n: I) -> String {
    itoa::Buffer::new().format(n).to_owned()
}
