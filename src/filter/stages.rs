use tracing::trace;

use super::{OWNER_ADDRESS, OWNER_NAME, SITUS_ADDRESS};
use crate::input::Record;
use crate::names::{first_match, ReferenceName};
use crate::utils::{char_prefix, normalize};

/// Stage 1: keep rows whose OWNER NAME matches at least one reference name.
///
/// Each row is kept at most once; checking stops at the first matching name.
/// Rows without an OWNER NAME value are dropped.
pub fn match_names<I>(names: &[ReferenceName], rows: I) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    rows.into_iter()
        .filter(|row| {
            let Some(owner) = row.get(OWNER_NAME) else {
                return false;
            };
            match first_match(names, owner) {
                Some(name) => {
                    trace!(owner, matched = %name.full, "name match");
                    true
                }
                None => false,
            }
        })
        .collect()
}

/// True when both normalized strings are at least `n` characters long and share
/// their first `n` characters.
pub fn prefix_matches(a: &str, b: &str, n: usize) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    match (char_prefix(&a, n), char_prefix(&b, n)) {
        (Some(pa), Some(pb)) => pa == pb,
        _ => false,
    }
}

/// Stage 2: keep rows whose OWNER ADDRESS and SITUS ADDRESS share an `n`-character prefix.
///
/// Rows missing either address column are dropped.
pub fn match_addresses<I>(rows: I, n: usize) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    rows.into_iter()
        .filter(|row| match (row.get(OWNER_ADDRESS), row.get(SITUS_ADDRESS)) {
            (Some(owner), Some(situs)) => prefix_matches(owner, situs, n),
            _ => false,
        })
        .collect()
}
