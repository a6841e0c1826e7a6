use super::trace::TraceStep;
use crate::tables::Element;
use crate::ten_gods::TenGodGroup;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use typed_builder::TypedBuilder;

// --- UPSTREAM INPUTS ---

/// Favorable / unfavorable elements resolved upstream. Each slot may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavorableElementSet {
    pub yongshin: Option<Element>,
    pub heeshin: Option<Element>,
    pub gishin: Option<Element>,
    pub gushin: Option<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrengthLevel {
    Strong,
    Weak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenGodProfile {
    pub dominant_groups: Vec<TenGodGroup>,
    pub weak_groups: Vec<TenGodGroup>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StructureKind {
    #[default]
    Ordinary,
    /// 종격: the chart yields to its strongest force.
    FollowDominant,
    /// 종강/전왕: the day master is overwhelming and should be fed.
    FollowSelf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Structure {
    pub name: String,
    pub kind: StructureKind,
}

/// Everything the upstream resolvers hand over for one chart.
#[derive(TypedBuilder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartProfile {
    #[builder(default)]
    pub favorable: FavorableElementSet,
    #[builder(default, setter(strip_option))]
    pub strength: Option<StrengthLevel>,
    #[builder(default, setter(strip_option))]
    pub ten_gods: Option<TenGodProfile>,
    #[builder(default, setter(strip_option))]
    pub structure: Option<Structure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameCharacter {
    pub character: String,
    pub resource_element: Element,
}

impl NameCharacter {
    pub fn new(character: impl Into<String>, resource_element: Element) -> Self {
        Self {
            character: character.into(),
            resource_element,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateName {
    pub label: String,
    pub characters: Vec<NameCharacter>,
}

impl CandidateName {
    pub fn new(label: impl Into<String>, characters: Vec<NameCharacter>) -> Self {
        Self {
            label: label.into(),
            characters,
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.characters.iter().map(|c| c.resource_element)
    }
}

/// An optional upstream signal that was missing for an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputGap {
    Yongshin,
    StrengthLevel,
}

// --- OUTPUTS ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    /// `None` when the inputs for this sub-score were missing.
    pub value: Option<f64>,
    pub weight: f64,
}

impl SubScore {
    pub fn available(value: f64, weight: f64) -> Self {
        Self {
            value: Some(value),
            weight,
        }
    }

    pub fn missing(weight: f64) -> Self {
        Self {
            value: None,
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Penalties {
    pub gishin: f64,
    pub gushin: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMatches {
    pub yongshin: u32,
    pub generates_yongshin: u32,
    pub heeshin: u32,
    pub gishin: u32,
    pub gushin: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringBreakdown {
    pub balance: SubScore,
    pub yongshin_match: SubScore,
    pub strength: SubScore,
    pub ten_god: SubScore,
    pub penalties: Penalties,
    pub element_matches: ElementMatches,
    pub weighted_before_penalty: f64,
    pub final_score: f64,
    /// 1.0 when every sub-score was available, otherwise the weight share that was.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub candidate: CandidateName,
    pub breakdown: ScoringBreakdown,
    pub trace: Vec<TraceStep>,
    pub gaps: Vec<InputGap>,
}
