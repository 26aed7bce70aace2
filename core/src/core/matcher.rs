use std::collections::BTreeSet;

use anyhow::anyhow;
use globset::Glob;

use crate::utils::error::{ReposyncError, ReposyncResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    And,
    Or,
}

/// one `--name` filter unit, combined with the running match set
/// by its connector (the first term's connector is ignored)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub pattern: String,
    pub connector: Connector,
}

impl Term {
    pub fn new(pattern: impl AsRef<str>, connector: Connector) -> Self {
        Self {
            pattern: pattern.as_ref().to_string(),
            connector,
        }
    }
}

/// fold the term list left-to-right over the full name set
///
/// the first term seeds the accumulator, every later term is folded in with
/// union (`Or`) or intersection (`And`) strictly in the order given, so
/// mixing connectors is order-dependent on purpose
pub fn match_repos<'a>(
    terms: &[Term],
    names: impl IntoIterator<Item = &'a str>,
) -> ReposyncResult<BTreeSet<String>> {
    if terms.is_empty() {
        return Err(anyhow!(ReposyncError::NoTermsSpecified));
    }

    let names: Vec<&str> = names.into_iter().collect();

    let mut accumulator: Option<BTreeSet<String>> = None;
    for term in terms {
        let matched = match_set(&term.pattern, &names)?;
        accumulator = Some(match accumulator {
            None => matched,
            Some(acc) => match term.connector {
                Connector::Or => acc.union(&matched).cloned().collect(),
                Connector::And => acc.intersection(&matched).cloned().collect(),
            },
        });
    }

    // terms is non-empty, so the accumulator is always seeded
    Ok(accumulator.unwrap_or_default())
}

fn match_set(pattern: &str, names: &[&str]) -> ReposyncResult<BTreeSet<String>> {
    let glob = Glob::new(&as_glob(pattern))
        .map_err(|e| anyhow!(ReposyncError::InvalidPattern(pattern.to_string(), e)))?
        .compile_matcher();

    Ok(names
        .iter()
        .filter(|name| glob.is_match(name))
        .map(|name| name.to_string())
        .collect())
}

/// a bare pattern matches anywhere in the name, like the hosting
/// service's own `in:name` filter
fn as_glob(pattern: &str) -> String {
    match pattern.contains(['*', '?', '[', '{']) {
        true => pattern.to_string(),
        false => format!("*{}*", pattern),
    }
}
