use crate::analysis::{best_rotation, BaselineDelta};
use crate::model::AnalysisResult;
use crate::solver::LimitingFactor;
use std::fmt::Write;

/// Permet de customiser le rendu d'un résultat (texte, markdown, etc.).
pub trait ResultRenderer {
    fn render(&self, result: &AnalysisResult, delta: Option<&BaselineDelta>) -> String;
}

/// Rendu texte compact destiné au terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ResultRenderer for TextReport {
    fn render(&self, result: &AnalysisResult, delta: Option<&BaselineDelta>) -> String {
        let w = &result.weekends;
        let v = &result.vacation;
        let headcount = match result.staffing.headcount() {
            Some(h) => h.to_string(),
            None => "N/A".to_string(),
        };
        let limiting = match result.staffing.limiting_factor {
            LimitingFactor::Volume => "volume",
            LimitingFactor::NightCoverage => "nuits",
            LimitingFactor::Unachievable => "nuits non couvrables",
        };
        format!(
            "{name} [{pattern}] cycle {cycle} j\n  jours: {t} T{dt} / {s} S / {l} L ({n} nuits)\n  week-ends complets: {full}/{total}{dw} ({clean} L+L, {sal} avec saliente)\n  congés: {prev} + {vac} + {post} = {vtotal} j (x{factor:.2})\n  effectif requis: {headcount}{dh} ({limiting})\n",
            name = result.rotation_name,
            pattern = result.pattern,
            cycle = result.cycle_length,
            t = result.work_days,
            dt = signed(delta.map(|d| d.work_days)),
            s = result.transitional_days,
            l = result.rest_days,
            n = result.total_nights,
            full = w.full_weekends,
            total = w.total_weekends,
            dw = signed(delta.map(|d| d.full_weekends)),
            clean = w.clean_weekends,
            sal = w.transitional_weekends,
            prev = v.prev,
            vac = v.vac,
            post = v.post,
            vtotal = v.total,
            factor = v.factor,
            dh = signed(delta.and_then(|d| d.headcount)),
        )
    }
}

fn signed(diff: Option<i64>) -> String {
    match diff {
        Some(d) if d != 0 => format!(" ({d:+})"),
        _ => String::new(),
    }
}

/// Rend toutes les rotations, écarts calculés par rapport à la première,
/// puis la meilleure en week-ends complets.
pub fn render_report(results: &[AnalysisResult], renderer: &dyn ResultRenderer) -> String {
    let mut out = String::new();
    let Some(baseline) = results.first() else {
        return out;
    };
    for (i, result) in results.iter().enumerate() {
        let delta = (i > 0).then(|| BaselineDelta::between(baseline, result));
        out.push_str(&renderer.render(result, delta.as_ref()));
    }
    if let Some(best) = best_rotation(results) {
        let _ = writeln!(
            out,
            "meilleure rotation: {} ({} week-ends complets)",
            best.rotation_name, best.weekends.full_weekends
        );
    }
    out
}
