//! # Search Filter
//!
//! Derives the visible list from the canonical one. Runs on every keystroke,
//! no debounce: the list is local and a few hundred entries long.
//!
//! - Empty or missing query → everything, in the original order.
//! - Otherwise → case-insensitive substring match on the country name,
//!   original relative order preserved. Zero hits is an empty result.

use crate::core::country::Country;

/// Returns true if `country` belongs in the view for `query`.
pub fn matches(country: &Country, query: Option<&str>) -> bool {
    match query {
        None | Some("") => true,
        Some(q) => country.name.to_lowercase().contains(&q.to_lowercase()),
    }
}

/// Filters `all` by `query`, borrowing from the canonical list.
pub fn filter<'a>(all: &'a [Country], query: Option<&str>) -> Vec<&'a Country> {
    all.iter().filter(|c| matches(c, query)).collect()
}

/// Same selection as [`filter`], expressed as positions in `all`.
///
/// The list screen stores this so it can hold the filtered view without
/// owning a second copy of the countries.
pub fn matching_indices(all: &[Country], query: Option<&str>) -> Vec<usize> {
    // Lowercase the query once instead of per entry
    let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);
    all.iter()
        .enumerate()
        .filter(|(_, c)| match &needle {
            None => true,
            Some(n) => c.name.to_lowercase().contains(n.as_str()),
        })
        .map(|(i, _)| i)
        .collect()
}
