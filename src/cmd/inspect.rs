use crate::reports;
use clap::Args;
use saju::error::{SajuError, SajuResult};
use saju::relations;
use saju::roots::root_strength;
use saju::tables::{Branch, Stem};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct TablesArgs {}

#[derive(Args, Debug, Clone)]
pub struct RelateArgs {
    /// Two or three branches: `子`, `ja` or a code `0..11`.
    #[arg(num_args = 2..=3, required = true)]
    pub branches: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RootArgs {
    /// Stem: `甲`, `gap` or a code `0..9`.
    pub stem: String,

    /// Branches to check; all twelve when omitted.
    pub branches: Vec<String>,
}

fn token_error(kind: &str, token: &str) -> SajuError {
    SajuError::Config(format!("unknown {} '{}'", kind, token))
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub fn parse_stem(token: &str) -> SajuResult<Stem> {
    let token = token.trim();
    if let Some(s) = single_char(token).and_then(Stem::from_hanja) {
        return Ok(s);
    }
    if let Ok(code) = token.parse::<u8>() {
        return Stem::from_code(code);
    }
    Stem::from_str(token).map_err(|_| token_error("stem", token))
}

pub fn parse_branch(token: &str) -> SajuResult<Branch> {
    let token = token.trim();
    if let Some(b) = single_char(token).and_then(Branch::from_hanja) {
        return Ok(b);
    }
    if let Ok(code) = token.parse::<u8>() {
        return Branch::from_code(code);
    }
    Branch::from_str(token).map_err(|_| token_error("branch", token))
}

pub fn run_tables(_args: TablesArgs) -> SajuResult<()> {
    reports::print_hidden_table();
    Ok(())
}

pub fn run_relate(args: RelateArgs) -> SajuResult<()> {
    let branches = args
        .branches
        .iter()
        .map(|t| parse_branch(t))
        .collect::<SajuResult<Vec<_>>>()?;
    let hits = relations::scan(&branches);
    reports::print_relations(&branches, &hits);
    Ok(())
}

pub fn run_root(args: RootArgs) -> SajuResult<()> {
    let stem = parse_stem(&args.stem)?;
    let branches = if args.branches.is_empty() {
        Branch::iter().collect()
    } else {
        args.branches
            .iter()
            .map(|t| parse_branch(t))
            .collect::<SajuResult<Vec<_>>>()?
    };
    let rows: Vec<_> = branches
        .into_iter()
        .map(|b| (b, root_strength(stem, b)))
        .collect();
    reports::print_roots(stem, &rows);
    Ok(())
}
