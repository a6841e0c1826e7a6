use super::trace::{StepKey, TraceStep};
use super::types::{
    CandidateName, ElementMatches, FavorableElementSet, InputGap, Penalties, StrengthLevel,
    Structure, StructureKind, SubScore, TenGodProfile,
};
use crate::chart::{Chart, PillarPosition};
use crate::config::ScoringWeights;
use crate::roots::RootStrength;
use crate::tables::climate;
use crate::tables::{Element, ElementCounts, ELEMENT_COUNT};
use crate::ten_gods::{ten_god, TenGodCounts, TenGodGroup};
use itertools::Itertools;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

const CHART_ITEMS: u32 = 8;
const CLIMATE_SOURCE: &str = "Gungtong Bogam (窮通寶鑑), seasonal adjustment table";
const EXCESS_THRESHOLD: u32 = 3;

fn label(e: Element) -> String {
    format!("{}({})", e, e.hanja())
}

fn label_list(elements: impl IntoIterator<Item = Element>) -> String {
    let joined = elements.into_iter().map(label).join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

pub fn name_distribution(name: &CandidateName) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for e in name.elements() {
        counts[e.index()] += 1;
    }
    counts
}

/// Mean per-element credit scaled to 0-100.
fn mean_credit(name: &CandidateName, credit: impl Fn(Element) -> f64) -> f64 {
    let n = name.characters.len();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = name.elements().map(credit).sum();
    100.0 * total / n as f64
}

// --- 1-2. DISTRIBUTION & BALANCE ---

pub fn balance_score(chart_counts: &ElementCounts, name_counts: &ElementCounts) -> f64 {
    let n: u32 = chart_counts.iter().sum::<u32>() + name_counts.iter().sum::<u32>();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let ideal = n / ELEMENT_COUNT as f64;
    let dev: f64 = (0..ELEMENT_COUNT)
        .map(|i| ((chart_counts[i] + name_counts[i]) as f64 - ideal).abs())
        .sum();
    // Every item piled onto one element.
    let max_dev = 2.0 * n * (ELEMENT_COUNT as f64 - 1.0) / ELEMENT_COUNT as f64;
    100.0 * (1.0 - dev / max_dev)
}

pub fn distribution_step(chart: &Chart, name: &CandidateName) -> (f64, TraceStep) {
    let chart_counts = chart.element_distribution();
    let name_counts = name_distribution(name);
    let score = balance_score(&chart_counts, &name_counts);

    let counts_line = Element::iter()
        .map(|e| format!("{}={}", label(e), chart_counts[e.index()]))
        .join(" ");
    let mut step = TraceStep::new(StepKey::Distribution)
        .evidence(format!("chart {} ({} items)", counts_line, CHART_ITEMS))
        .evidence(format!(
            "name elements: {}",
            label_list(name.elements())
        ));

    let deficient: Vec<Element> = Element::iter()
        .filter(|e| chart_counts[e.index()] == 0)
        .collect();
    for e in &deficient {
        if name_counts[e.index()] > 0 {
            step = step.reason(format!("deficient {} is filled by the name", label(*e)));
        } else {
            step = step.reason(format!("deficient {} stays missing", label(*e)));
        }
    }
    for e in Element::iter() {
        let c = chart_counts[e.index()];
        if c >= EXCESS_THRESHOLD {
            let added = name_counts[e.index()];
            step = step.reason(format!(
                "excessive {} ({} in chart, {} added by the name)",
                label(e),
                c,
                added
            ));
        }
    }
    step = step.reason(format!("balance {:.2}", score));

    debug!(score, "distribution");
    (score, step)
}

// --- CHART SIGNALS ---

pub fn chart_signals_step(chart: &Chart) -> TraceStep {
    let dm = chart.day_master();
    let mut step = TraceStep::new(StepKey::ChartSignals)
        .evidence(format!("chart {}", chart))
        .evidence(format!("day master {}({})", dm, dm.hanja()));

    let gods = PillarPosition::ALL
        .iter()
        .filter(|&&p| p != PillarPosition::Day)
        .map(|&p| {
            let stem = chart.pillar(p).stem;
            format!("{}={}", stem.hanja(), ten_god(dm, stem))
        })
        .join(" ");
    step = step.evidence(format!("visible stems: {}", gods));

    for (position, strength) in chart.day_master_roots() {
        let branch = chart.pillar(position).branch;
        step = step.evidence(format!(
            "root in {} {}({}): {}",
            position,
            branch,
            branch.hanja(),
            strength
        ));
    }

    for revealed in chart.revealed() {
        let stems = revealed
            .entries
            .iter()
            .map(|e| format!("{}({})", e.stem.hanja(), e.role))
            .join(" ");
        step = step.evidence(format!(
            "revealed from {} {}: {}",
            revealed.position,
            revealed.branch.hanja(),
            stems
        ));
    }

    let hits = chart.relations();
    if hits.is_empty() {
        step = step.reason("no branch relations");
    }
    for hit in hits {
        step = step.reason(hit.to_string());
    }
    step
}

// --- 3. YONGSHIN MATCH ---

pub fn yongshin_credit(e: Element, favorable: &FavorableElementSet, w: &ScoringWeights) -> f64 {
    let Some(yongshin) = favorable.yongshin else {
        return 0.0;
    };
    let mut credit: f64 = 0.0;
    if e == yongshin {
        credit = credit.max(1.0);
    }
    if e.generates() == yongshin {
        credit = credit.max(w.credit_generates_yongshin);
    }
    if favorable.heeshin == Some(e) {
        credit = credit.max(w.credit_heeshin);
    }
    credit
}

pub fn count_matches(name: &CandidateName, favorable: &FavorableElementSet) -> ElementMatches {
    let mut m = ElementMatches::default();
    for e in name.elements() {
        if favorable.yongshin == Some(e) {
            m.yongshin += 1;
        }
        if favorable.yongshin == Some(e.generates()) {
            m.generates_yongshin += 1;
        }
        if favorable.heeshin == Some(e) {
            m.heeshin += 1;
        }
        if favorable.gishin == Some(e) {
            m.gishin += 1;
        }
        if favorable.gushin == Some(e) {
            m.gushin += 1;
        }
    }
    m
}

pub fn yongshin_step(
    chart: &Chart,
    name: &CandidateName,
    favorable: &FavorableElementSet,
    w: &ScoringWeights,
) -> (Option<f64>, TraceStep) {
    let need = climate::recommend(chart.day_master(), chart.month_branch());
    let climate_line = format!(
        "climate need for {} in {}: {}",
        chart.day_master().hanja(),
        chart.month_branch().hanja(),
        need.all().map(|s| s.hanja().to_string()).join("")
    );
    let mut step = TraceStep::new(StepKey::YongshinMatch)
        .evidence(climate_line)
        .cite(CLIMATE_SOURCE);

    let Some(yongshin) = favorable.yongshin else {
        step = step.reason("yongshin not resolved, sub-score unavailable");
        return (None, step);
    };

    step = step.evidence(format!("yongshin {}", label(yongshin)));
    if let Some(h) = favorable.heeshin {
        step = step.evidence(format!("heeshin {}", label(h)));
    }
    for c in &name.characters {
        let credit = yongshin_credit(c.resource_element, favorable, w);
        step = step.reason(format!(
            "{} {} credit {:.2}",
            c.character,
            label(c.resource_element),
            credit
        ));
    }
    let score = mean_credit(name, |e| yongshin_credit(e, favorable, w));
    step = step.reason(format!("yongshin match {:.2}", score));

    debug!(score, "yongshin match");
    (Some(score), step)
}

// --- 4. STRENGTH ROLE ---

/// Whether the name should support the day master rather than drain it.
fn wants_support(level: StrengthLevel, structure: Option<&Structure>) -> bool {
    match structure.map(|s| s.kind).unwrap_or_default() {
        StructureKind::FollowSelf => true,
        StructureKind::FollowDominant => false,
        StructureKind::Ordinary => level == StrengthLevel::Weak,
    }
}

pub fn strength_credit(group: TenGodGroup, support: bool, w: &ScoringWeights) -> f64 {
    match (support, group) {
        (true, TenGodGroup::Resource) => 1.0,
        (true, TenGodGroup::Companion) => w.credit_weak_companion,
        (false, TenGodGroup::Output) | (false, TenGodGroup::Officer) => 1.0,
        (false, TenGodGroup::Wealth) => w.credit_strong_wealth,
        _ => 0.0,
    }
}

/// A stated level that the day master's own roots contradict.
pub fn root_conflict(chart: &Chart, level: StrengthLevel) -> bool {
    let roots = chart.day_master_roots();
    let strong = roots
        .iter()
        .filter(|(_, r)| *r == RootStrength::Strong)
        .count();
    let rooted = roots.iter().any(|(_, r)| *r != RootStrength::None);
    match level {
        StrengthLevel::Weak => strong >= 2,
        StrengthLevel::Strong => !rooted,
    }
}

pub fn strength_step(
    chart: &Chart,
    name: &CandidateName,
    level: Option<StrengthLevel>,
    structure: Option<&Structure>,
    w: &ScoringWeights,
) -> (Option<f64>, TraceStep) {
    let mut step = TraceStep::new(StepKey::StrengthRole);
    let Some(level) = level else {
        step = step.reason("strength level not resolved, sub-score unavailable");
        return (None, step);
    };

    let dm = chart.day_master().element();
    let support = wants_support(level, structure);
    step = step.evidence(format!("strength level {}", level));
    if let Some(s) = structure {
        step = step.evidence(format!("structure {} ({})", s.name, s.kind));
    }
    step = step.reason(if support {
        "name should support the day master (resource, companion)"
    } else {
        "name should drain or restrain the day master (output, officer, wealth)"
    });

    for c in &name.characters {
        let group = TenGodGroup::of(dm, c.resource_element);
        step = step.reason(format!(
            "{} {} is {} credit {:.2}",
            c.character,
            label(c.resource_element),
            group,
            strength_credit(group, support, w)
        ));
    }

    let confidence = if root_conflict(chart, level) {
        step = step.reason(format!("stated level {} conflicts with day master roots", level));
        w.confidence_root_conflict
    } else {
        w.confidence_strength
    };

    let score = mean_credit(name, |e| strength_credit(TenGodGroup::of(dm, e), support, w));
    step = step
        .reason(format!("strength role {:.2}", score))
        .confidence(confidence);

    debug!(score, confidence, "strength role");
    (Some(score), step)
}

// --- 5. TEN-GOD ROLE ---

/// Weak groups are absent from the chart, dominant ones reach the threshold.
pub fn derive_ten_god_profile(counts: &TenGodCounts, threshold: u32) -> TenGodProfile {
    TenGodProfile {
        dominant_groups: TenGodGroup::iter()
            .filter(|g| counts.get(*g) >= threshold)
            .collect(),
        weak_groups: TenGodGroup::iter()
            .filter(|g| counts.get(*g) == 0)
            .collect(),
    }
}

pub fn ten_god_credit(group: TenGodGroup, profile: &TenGodProfile, w: &ScoringWeights) -> f64 {
    if profile.weak_groups.contains(&group) {
        1.0
    } else if profile.dominant_groups.contains(&group) {
        0.0
    } else {
        w.credit_ten_god_neutral
    }
}

pub fn ten_god_step(
    chart: &Chart,
    name: &CandidateName,
    supplied: Option<&TenGodProfile>,
    w: &ScoringWeights,
) -> (f64, TraceStep) {
    let mut step = TraceStep::new(StepKey::TenGodRole);
    let derived;
    let profile = match supplied {
        Some(p) => p,
        None => {
            let counts = chart.ten_god_counts();
            let line = TenGodGroup::iter()
                .map(|g| format!("{}={}", g, counts.get(g)))
                .join(" ");
            step = step
                .evidence(format!("chart groups {}", line))
                .reason("groups derived from chart counts");
            derived = derive_ten_god_profile(&counts, w.threshold_dominant_group);
            &derived
        }
    };

    step = step
        .evidence(format!("weak groups: {}", profile.weak_groups.iter().join(", ")))
        .evidence(format!(
            "dominant groups: {}",
            profile.dominant_groups.iter().join(", ")
        ));

    let dm = chart.day_master().element();
    for c in &name.characters {
        let group = TenGodGroup::of(dm, c.resource_element);
        step = step.reason(format!(
            "{} {} is {} credit {:.2}",
            c.character,
            label(c.resource_element),
            group,
            ten_god_credit(group, profile, w)
        ));
    }
    let score = mean_credit(name, |e| ten_god_credit(TenGodGroup::of(dm, e), profile, w));
    step = step.reason(format!("ten-god role {:.2}", score));

    debug!(score, "ten-god role");
    (score, step)
}

// --- 6. WEIGHTING ---

/// Weighted mean over available sub-scores and the weight share they cover.
pub fn combine(subs: &[SubScore]) -> (f64, f64) {
    let available: f64 = subs
        .iter()
        .filter(|s| s.value.is_some())
        .map(|s| s.weight)
        .sum();
    if available <= 0.0 {
        return (0.0, 0.0);
    }
    let total: f64 = subs
        .iter()
        .filter_map(|s| s.value.map(|v| v * s.weight))
        .sum();
    (total / available, available)
}

pub fn fallback_step(gaps: &[InputGap], confidence: f64) -> TraceStep {
    warn!(?gaps, confidence, "scoring with missing inputs");
    let mut step = TraceStep::new(StepKey::Fallback);
    for gap in gaps {
        step = step.evidence(format!("missing input: {}", gap));
    }
    step.reason("weights renormalized over the available sub-scores")
        .confidence(confidence)
}

// --- 7. PENALTIES ---

pub fn penalties(matches: &ElementMatches, w: &ScoringWeights) -> Penalties {
    let gishin = w.penalty_gishin * matches.gishin as f64;
    let gushin = w.penalty_gushin * matches.gushin as f64;
    Penalties {
        gishin,
        gushin,
        total: gishin + gushin,
    }
}

pub fn penalty_step(
    favorable: &FavorableElementSet,
    matches: &ElementMatches,
    w: &ScoringWeights,
) -> (Penalties, TraceStep) {
    let p = penalties(matches, w);
    let mut step = TraceStep::new(StepKey::Penalty);
    if let Some(g) = favorable.gishin {
        step = step.evidence(format!("gishin {} matched {}x", label(g), matches.gishin));
    }
    if let Some(g) = favorable.gushin {
        step = step.evidence(format!("gushin {} matched {}x", label(g), matches.gushin));
    }
    step = step.reason(format!(
        "deduct {:.2} (gishin {:.2}, gushin {:.2})",
        p.total, p.gishin, p.gushin
    ));
    debug!(total = p.total, "penalty");
    (p, step)
}

/// 8. Final clamp.
pub fn final_score(weighted: f64, penalty_total: f64) -> f64 {
    (weighted - penalty_total).clamp(0.0, 100.0)
}
