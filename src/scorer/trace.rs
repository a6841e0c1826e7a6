use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Which inference step a trace entry explains. Declaration order is the order
/// the scorer emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    Distribution,
    ChartSignals,
    YongshinMatch,
    StrengthRole,
    TenGodRole,
    Fallback,
    Penalty,
}

/// One append-only entry of an evaluation trace. `summary` is left for the
/// narrative layer to fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub key: StepKey,
    pub summary: Option<String>,
    pub evidence: Vec<String>,
    pub reasoning: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl TraceStep {
    pub fn new(key: StepKey) -> Self {
        Self {
            key,
            summary: None,
            evidence: Vec::new(),
            reasoning: Vec::new(),
            citations: Vec::new(),
            confidence: None,
        }
    }

    pub fn evidence(mut self, item: impl Into<String>) -> Self {
        self.evidence.push(item.into());
        self
    }

    pub fn reason(mut self, item: impl Into<String>) -> Self {
        self.reasoning.push(item.into());
        self
    }

    pub fn cite(mut self, source: impl Into<String>) -> Self {
        self.citations.push(source.into());
        self
    }

    pub fn confidence(mut self, value: f64) -> Self {
        self.confidence = Some(value);
        self
    }
}

/// Ordered log of the steps one evaluation executed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceLog {
    steps: Vec<TraceStep>,
}

impl TraceLog {
    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn keys(&self) -> Vec<StepKey> {
        self.steps.iter().map(|s| s.key).collect()
    }

    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}
