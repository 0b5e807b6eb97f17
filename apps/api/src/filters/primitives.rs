//! Filter primitives — small, independent, composable operations over entry
//! lists. Every function is pure `(items, parameters) → items`: inputs are
//! never mutated and the output is always a fresh `Vec`.
//!
//! Composition order inside a section strategy: section density threshold →
//! timeframe → role/text match → index selection. Bullet-level filtering
//! happens per entry during rendering, not here.

use crate::dates::end_date;
use crate::filters::config::{bullet_cutoff, FilterConfig};
use crate::models::profile::{DateStamped, HasBullets};

/// Keeps entries whose end date is on or after `now − timeframe_years`.
/// Entries whose date cannot be parsed are always kept (fail open); a zero
/// timeframe is a no-op.
pub fn filter_by_timeframe<T>(items: &[T], config: &FilterConfig) -> Vec<T>
where
    T: DateStamped + Clone,
{
    let Some(cutoff) = config.cutoff_date() else {
        return items.to_vec();
    };

    let kept: Vec<T> = items
        .iter()
        .filter(|item| match item.date_text().and_then(|t| end_date(t, config.now)) {
            Some(end) => end >= cutoff,
            None => true,
        })
        .cloned()
        .collect();

    tracing::debug!(
        kept = kept.len(),
        total = items.len(),
        years = config.timeframe_years,
        "timeframe filter"
    );
    kept
}

/// Returns exactly the listed positions from the original list, in the order
/// the indices are listed. Out-of-range indices are dropped silently.
pub fn filter_by_indices<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .filter_map(|&i| items.get(i).cloned())
        .collect()
}

/// Case-insensitive substring match of `term` against the field selected by
/// `field_of`. Entries without the field are dropped; an empty term keeps
/// everything.
pub fn filter_by_text_match<T, F>(items: &[T], field_of: F, term: &str) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<&str>,
{
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            field_of(item)
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// The one hard-coded predicate in the filter library: keeps entries whose
/// title reads as a management-like role.
pub fn filter_management_roles<T, F>(items: &[T], title_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<&str>,
{
    items
        .iter()
        .filter(|item| {
            let title = title_of(item).unwrap_or("").to_lowercase();
            title.contains("manager")
                || title.contains("director")
                || title.contains("lead")
                || title.contains("principal")
        })
        .cloned()
        .collect()
}

/// Keeps bullets whose priority clears the active cutoff.
///
/// `threshold_override` (a preset's `bullet_priority_threshold`) wins over
/// the density-derived cutoff. With no priorities, or at full density, all
/// bullets pass. A priority array shorter than the bullet list treats the
/// missing positions as priority 1.
pub fn filter_bullets(
    bullets: &[String],
    priorities: Option<&[u8]>,
    density: u8,
    threshold_override: Option<u8>,
) -> Vec<String> {
    let Some(priorities) = priorities else {
        return bullets.to_vec();
    };
    let cutoff = match threshold_override.or_else(|| bullet_cutoff(density)) {
        Some(cutoff) => cutoff,
        None => return bullets.to_vec(),
    };

    bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| priorities.get(*i).copied().unwrap_or(1) >= cutoff)
        .map(|(_, b)| b.clone())
        .collect()
}

/// Runs bullet filtering over whole entries and applies the drop rule: an
/// entry whose bullets were all filtered away is removed, but an entry that
/// never had bullets survives any density.
pub fn filter_entry_bullets<T>(
    entries: Vec<T>,
    density: u8,
    threshold_override: Option<u8>,
) -> Vec<(T, Vec<String>)>
where
    T: HasBullets,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let bullets = filter_bullets(
                entry.bullets(),
                entry.bullet_priorities(),
                density,
                threshold_override,
            );
            if bullets.is_empty() && !entry.bullets().is_empty() {
                None
            } else {
                Some((entry, bullets))
            }
        })
        .collect()
}

/// Entry-level priority floor used by preset `priority_threshold` filters.
pub fn filter_by_entry_priority<T, F>(items: &[T], priority_of: F, threshold: u8) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> u8,
{
    items
        .iter()
        .filter(|item| priority_of(item) >= threshold)
        .cloned()
        .collect()
}
