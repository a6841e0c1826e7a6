use crate::chart::{Chart, Pillar};
use crate::config::Config;
use crate::error::{IndexKind, SajuError, SajuResult};
use crate::scorer::{self, CandidateName, ChartProfile, Evaluation, Scorer};
use crate::scorer::{FavorableElementSet, StrengthLevel, Structure, TenGodProfile};
use crate::tables::{Branch, Element, Stem};
use crate::ten_gods::TenGodGroup;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Raw codes as handed over by the calendar layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PillarCode {
    pub stem_code: i64,
    pub branch_code: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FavorableCodes {
    pub yongshin: Option<i64>,
    pub heeshin: Option<i64>,
    pub gishin: Option<i64>,
    pub gushin: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StrengthInput {
    pub level: Option<StrengthLevel>,
    pub dominant_groups: Option<Vec<TenGodGroup>>,
    pub weak_groups: Option<Vec<TenGodGroup>>,
}

/// One chart plus the upstream resolver output, in wire form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationRequest {
    /// Year, month, day, hour.
    pub pillars: Vec<PillarCode>,
    pub favorable: FavorableCodes,
    pub strength: Option<StrengthInput>,
    pub structure: Option<Structure>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedCandidate {
    pub label: String,
    pub reason: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub fingerprint: String,
    pub chart: String,
    /// Ranked, best first.
    pub results: Vec<Evaluation>,
    pub failures: Vec<RejectedCandidate>,
}

fn code_to_u8(code: i64, kind: IndexKind) -> SajuResult<u8> {
    u8::try_from(code).map_err(|_| SajuError::InvalidIndex { kind, value: code })
}

fn element_from_code(code: Option<i64>) -> SajuResult<Option<Element>> {
    code.map(|c| Element::from_code(code_to_u8(c, IndexKind::Element)?))
        .transpose()
}

impl EvaluationRequest {
    pub fn load_from_reader<R: Read>(reader: R) -> SajuResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SajuResult<Self> {
        Self::load_from_reader(File::open(path)?)
    }

    /// Hex SHA-256 of the canonical JSON form.
    pub fn fingerprint(&self) -> SajuResult<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    pub fn chart(&self) -> SajuResult<Chart> {
        if self.pillars.len() != 4 {
            return Err(SajuError::StructuralViolation(format!(
                "expected 4 pillars, got {}",
                self.pillars.len()
            )));
        }
        let mut pillars = [Pillar::new(Stem::Gap, Branch::Ja); 4];
        for (slot, code) in pillars.iter_mut().zip(&self.pillars) {
            let stem = Stem::from_code(code_to_u8(code.stem_code, IndexKind::Stem)?)?;
            let branch = Branch::from_code(code_to_u8(code.branch_code, IndexKind::Branch)?)?;
            *slot = Pillar::new(stem, branch);
        }
        Ok(Chart { pillars })
    }

    pub fn profile(&self) -> SajuResult<ChartProfile> {
        let favorable = FavorableElementSet {
            yongshin: element_from_code(self.favorable.yongshin)?,
            heeshin: element_from_code(self.favorable.heeshin)?,
            gishin: element_from_code(self.favorable.gishin)?,
            gushin: element_from_code(self.favorable.gushin)?,
        };
        let strength = self.strength.as_ref();
        let ten_gods = strength.and_then(|s| {
            if s.dominant_groups.is_none() && s.weak_groups.is_none() {
                return None;
            }
            Some(TenGodProfile {
                dominant_groups: s.dominant_groups.clone().unwrap_or_default(),
                weak_groups: s.weak_groups.clone().unwrap_or_default(),
            })
        });
        Ok(ChartProfile {
            favorable,
            strength: strength.and_then(|s| s.level),
            ten_gods,
            structure: self.structure.clone(),
        })
    }

    pub fn resolve(&self) -> SajuResult<(Chart, ChartProfile)> {
        Ok((self.chart()?, self.profile()?))
    }
}

/// Service: score and rank a batch of candidates for one request.
pub fn evaluate(
    request: &EvaluationRequest,
    candidates: &[CandidateName],
    config: &Config,
) -> SajuResult<BatchReport> {
    let (chart, profile) = request.resolve()?;
    let fingerprint = request.fingerprint()?;
    let scorer = Scorer::new(config.clone())?;
    info!("Evaluating {} candidates for chart {}", candidates.len(), chart);

    let mut results = Vec::new();
    let mut failures = Vec::new();
    for (outcome, candidate) in scorer
        .score_batch(&chart, &profile, candidates)
        .into_iter()
        .zip(candidates)
    {
        match outcome {
            Ok(evaluation) => results.push(evaluation),
            Err(e) => {
                warn!("Rejected candidate '{}': {}", candidate.label, e);
                failures.push(RejectedCandidate {
                    label: candidate.label.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    scorer::rank(&mut results);

    Ok(BatchReport {
        fingerprint,
        chart: chart.to_string(),
        results,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EvaluationRequest {
        EvaluationRequest {
            pillars: vec![
                PillarCode { stem_code: 0, branch_code: 0 },
                PillarCode { stem_code: 2, branch_code: 2 },
                PillarCode { stem_code: 0, branch_code: 6 },
                PillarCode { stem_code: 2, branch_code: 2 },
            ],
            favorable: FavorableCodes {
                yongshin: Some(4),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn resolves_codes() {
        let (chart, profile) = request().resolve().unwrap();
        assert_eq!(chart.day_master(), Stem::Gap);
        assert_eq!(chart.month_branch(), Branch::In);
        assert_eq!(profile.favorable.yongshin, Some(Element::Water));
        assert!(profile.strength.is_none());
        assert!(profile.ten_gods.is_none());
    }

    #[test]
    fn out_of_range_codes_fail_fast() {
        let mut r = request();
        r.pillars[3].branch_code = 12;
        assert!(matches!(
            r.chart(),
            Err(SajuError::InvalidIndex { kind: IndexKind::Branch, value: 12 })
        ));
        assert_eq!(r.chart().unwrap_err().to_string(), "Invalid branch index: 12");
        r.pillars[3].branch_code = 2;
        r.pillars[0].stem_code = -1;
        assert!(matches!(
            r.chart(),
            Err(SajuError::InvalidIndex { kind: IndexKind::Stem, value: -1 })
        ));
    }

    #[test]
    fn fingerprint_is_stable_and_sensitive() {
        let a = request();
        let mut b = request();
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        assert_eq!(a.fingerprint().unwrap().len(), 64);
        b.favorable.heeshin = Some(3);
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }
}
