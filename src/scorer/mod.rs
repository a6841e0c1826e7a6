pub mod engine;
pub mod loader;
pub mod trace;
pub mod types;

pub use self::trace::{StepKey, TraceLog, TraceStep};
pub use self::types::{
    CandidateName, ChartProfile, Evaluation, FavorableElementSet, InputGap, NameCharacter,
    ScoringBreakdown, StrengthLevel, Structure, StructureKind, SubScore, TenGodProfile,
};
use crate::chart::Chart;
use crate::config::{BatchParams, Config, ScoringWeights};
use crate::error::{SajuError, SajuResult};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Name-compatibility scorer over a validated weight set.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub weights: ScoringWeights,
    pub batch: BatchParams,
}

impl Scorer {
    pub fn new(config: Config) -> SajuResult<Self> {
        config.weights.validate()?;
        Ok(Self {
            weights: config.weights,
            batch: config.batch,
        })
    }

    /// Scores one candidate against one chart. Missing favorable element or
    /// strength level degrades confidence; an empty name is rejected.
    pub fn evaluate(
        &self,
        chart: &Chart,
        profile: &ChartProfile,
        name: &CandidateName,
    ) -> SajuResult<Evaluation> {
        if name.characters.is_empty() {
            return Err(SajuError::StructuralViolation(format!(
                "candidate '{}' has no characters",
                name.label
            )));
        }
        let w = &self.weights;
        let mut log = TraceLog::default();
        let mut gaps = Vec::new();

        let (balance, step) = engine::distribution_step(chart, name);
        log.push(step);
        log.push(engine::chart_signals_step(chart));

        let (yongshin, step) = engine::yongshin_step(chart, name, &profile.favorable, w);
        log.push(step);
        if yongshin.is_none() {
            gaps.push(InputGap::Yongshin);
        }

        let (strength, step) = engine::strength_step(
            chart,
            name,
            profile.strength,
            profile.structure.as_ref(),
            w,
        );
        log.push(step);
        if strength.is_none() {
            gaps.push(InputGap::StrengthLevel);
        }

        let (ten_god, step) = engine::ten_god_step(chart, name, profile.ten_gods.as_ref(), w);
        log.push(step);

        let subs = [
            SubScore::available(balance, w.weight_balance),
            yongshin.map_or(SubScore::missing(w.weight_yongshin), |v| {
                SubScore::available(v, w.weight_yongshin)
            }),
            strength.map_or(SubScore::missing(w.weight_strength), |v| {
                SubScore::available(v, w.weight_strength)
            }),
            SubScore::available(ten_god, w.weight_ten_god),
        ];
        let (weighted, available) = engine::combine(&subs);
        let confidence = if gaps.is_empty() {
            1.0
        } else {
            log.push(engine::fallback_step(&gaps, available));
            available
        };

        let element_matches = engine::count_matches(name, &profile.favorable);
        let (penalties, step) = engine::penalty_step(&profile.favorable, &element_matches, w);
        log.push(step);

        let final_score = engine::final_score(weighted, penalties.total);
        debug!(
            candidate = %name.label,
            final_score,
            steps = ?log.keys(),
            "evaluated"
        );

        let [balance, yongshin_match, strength, ten_god] = subs;
        Ok(Evaluation {
            candidate: name.clone(),
            breakdown: ScoringBreakdown {
                balance,
                yongshin_match,
                strength,
                ten_god,
                penalties,
                element_matches,
                weighted_before_penalty: weighted,
                final_score,
                confidence,
            },
            trace: log.into_steps(),
            gaps,
        })
    }

    /// Scores candidates in parallel. Results keep input order; anything past
    /// `batch.max_candidates` is dropped.
    pub fn score_batch(
        &self,
        chart: &Chart,
        profile: &ChartProfile,
        names: &[CandidateName],
    ) -> Vec<SajuResult<Evaluation>> {
        let limit = self.batch.max_candidates.min(names.len());
        if limit < names.len() {
            warn!(
                "Dropping {} candidates beyond max_candidates={}",
                names.len() - limit,
                self.batch.max_candidates
            );
        }
        let results: Vec<_> = names[..limit]
            .par_iter()
            .map(|name| self.evaluate(chart, profile, name))
            .collect();
        info!(
            "Scored {} candidates ({} rejected)",
            results.len(),
            results.iter().filter(|r| r.is_err()).count()
        );
        results
    }
}

/// Highest final score first; equal scores keep their input order.
pub fn rank(evaluations: &mut [Evaluation]) {
    evaluations.sort_by(|a, b| b.breakdown.final_score.total_cmp(&a.breakdown.final_score));
}
