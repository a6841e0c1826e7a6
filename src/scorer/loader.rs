use super::types::{CandidateName, NameCharacter};
use crate::error::SajuResult;
use crate::tables::Element;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{info, warn};

/// Accepts `Water`, `water`, `水` or a numeric code `4`.
pub fn parse_element(token: &str) -> Option<Element> {
    let token = token.trim();
    if let Ok(e) = Element::from_str(token) {
        return Some(e);
    }
    if let Some(e) = Element::iter().find(|e| token.chars().eq(std::iter::once(e.hanja())))
    {
        return Some(e);
    }
    token.parse::<u8>().ok().and_then(|c| Element::from_code(c).ok())
}

fn parse_record(record: &csv::StringRecord) -> Result<CandidateName, String> {
    let label = record.get(0).map(str::trim).unwrap_or_default();
    if label.is_empty() {
        return Err("missing label".to_string());
    }
    let fields: Vec<&str> = record.iter().skip(1).map(str::trim).collect();
    // Trailing empty cells come from ragged rows.
    let used = fields
        .iter()
        .rposition(|f| !f.is_empty())
        .map_or(0, |i| i + 1);
    if used == 0 {
        return Err(format!("'{}' has no characters", label));
    }
    if used % 2 != 0 {
        return Err(format!("'{}' has a character without an element", label));
    }

    let mut characters = Vec::with_capacity(used / 2);
    for pair in fields[..used].chunks(2) {
        let (ch, el) = (pair[0], pair[1]);
        if ch.is_empty() {
            return Err(format!("'{}' has an empty character cell", label));
        }
        let element = parse_element(el)
            .ok_or_else(|| format!("'{}' has unknown element '{}'", label, el))?;
        characters.push(NameCharacter::new(ch, element));
    }
    Ok(CandidateName::new(label, characters))
}

/// Reads `label,char,element,char,element,...` rows after a header line.
/// Malformed rows are skipped with a warning.
pub fn load_candidates<R: Read>(reader: R) -> SajuResult<Vec<CandidateName>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut candidates = Vec::new();
    let mut skipped = 0usize;
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        match parse_record(&record) {
            Ok(c) => candidates.push(c),
            Err(reason) => {
                skipped += 1;
                warn!("Skipping candidate row {}: {}", row + 2, reason);
            }
        }
    }
    info!(
        "Loaded {} candidates ({} rows skipped)",
        candidates.len(),
        skipped
    );
    Ok(candidates)
}

pub fn load_candidates_from_file<P: AsRef<Path>>(path: P) -> SajuResult<Vec<CandidateName>> {
    let file = File::open(path)?;
    load_candidates(file)
}
