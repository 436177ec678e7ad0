//! Minimax worst-case calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible pattern.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible pattern that could result from this guess:
/// - Count how many candidates would produce that pattern
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let max_remaining = calculate_max_remaining(&guess, &candidate_refs);
/// assert!(max_remaining <= 2); // Can't be more than total candidates
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[&Word]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    // Group candidates by pattern
    let pattern_counts = group_by_pattern(guess, candidates);

    // Return the maximum count (worst case)
    pattern_counts.values().max().copied().unwrap_or(0)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}
