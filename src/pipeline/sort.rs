//! Sort stage: non-destructive, stable ordering by sort mode.
//!
//! | mode | key | direction |
//! |---|---|---|
//! | `yearOldest` | founding year | ascending |
//! | `yearNewest` | founding year | descending |
//! | `scoreHigh` | total score | descending |
//! | `scoreLow` | total score | ascending |
//! | `nameAZ` | name | ascending, collated |
//! | `nameZA` | name | descending, collated |
//!
//! Ties keep input order in every mode.

use crate::domain::{Company, SortMethod};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two names for display ordering.
///
/// Three levels, each consulted only on a tie at the previous one:
/// 1. Base letters, ignoring case and accents: `"Fjällräven"` sorts before
///    `"Fjord"`, `"apex"` before `"Bravo"`.
/// 2. Accents: the unaccented form comes first (`"resume"` < `"résumé"`).
/// 3. Case: the lower-case form comes first.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    folded(a, false)
        .cmp(folded(b, false))
        .then_with(|| folded(a, true).cmp(folded(b, true)))
        .then_with(|| case_order(a, b))
}

/// Canonically decomposed, lower-cased characters, optionally without marks.
fn folded(s: &str, keep_marks: bool) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(move |c| keep_marks || !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.nfd().zip(b.nfd()).find(|(x, y)| x != y).map_or_else(
        || a.nfd().count().cmp(&b.nfd().count()),
        |(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        },
    )
}

/// Returns the comparator for a sort mode.
fn comparator(method: SortMethod) -> fn(&Company, &Company) -> Ordering {
    match method {
        SortMethod::YearOldest => |a: &Company, b: &Company| a.year_founded.cmp(&b.year_founded),
        SortMethod::YearNewest => |a: &Company, b: &Company| b.year_founded.cmp(&a.year_founded),
        SortMethod::ScoreHigh => |a: &Company, b: &Company| b.total_score.cmp(&a.total_score),
        SortMethod::ScoreLow => |a: &Company, b: &Company| a.total_score.cmp(&b.total_score),
        SortMethod::NameAZ => |a: &Company, b: &Company| collate(&a.name, &b.name),
        SortMethod::NameZA => |a: &Company, b: &Company| collate(&b.name, &a.name),
    }
}

/// Returns a new sequence ordered by `method`. The input is left untouched.
///
/// # Example
///
/// ```rust
/// use warranty_ratings::catalog::Catalog;
/// use warranty_ratings::domain::SortMethod;
/// use warranty_ratings::pipeline::sort_companies;
///
/// let catalog = Catalog::bundled();
/// let sorted = sort_companies(catalog.companies(), SortMethod::ScoreHigh);
/// let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, vec!["Osprey", "Patagonia", "Hydroflask"]);
/// ```
#[must_use]
pub fn sort_companies(companies: &[Company], method: SortMethod) -> Vec<Company> {
    let _span = tracing::debug_span!("sort_companies", count = companies.len(), method = method.id())
        .entered();

    let mut sorted = companies.to_vec();
    // `sort_by` is stable, which gives input-order tie-breaking.
    sorted.sort_by(comparator(method));
    sorted
}

/// Sorts by a mode identifier such as `"nameAZ"`.
///
/// An unrecognized identifier returns the input order unchanged.
#[must_use]
pub fn sort_by_id(companies: &[Company], id: &str) -> Vec<Company> {
    SortMethod::from_id(id).map_or_else(
        || {
            tracing::debug!(sort_id = %id, "unknown sort mode, keeping input order");
            companies.to_vec()
        },
        |method| sort_companies(companies, method),
    )
}
