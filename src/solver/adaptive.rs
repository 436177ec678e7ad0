//! Adaptive strategy
//!
//! Adjusts tactics based on number of remaining candidates.

use super::{selection, strategy::Strategy};
use crate::core::Word;

/// Adaptive strategy with configurable tier thresholds
///
/// Achieves 99.7-99.8% optimal performance (3.428-3.436 avg guesses) by using different
/// tactics depending on how many candidates remain.
///
/// ## How Thresholds Work
///
/// Thresholds use cascading `>` comparisons:
/// ```text
/// if candidates > pure_entropy_threshold          → PureEntropy
/// else if candidates > entropy_minimax_threshold  → EntropyMinimax
/// else if candidates > hybrid_threshold           → Hybrid
/// else if candidates > minimax_first_threshold    → MinimaxFirst
/// else                                            → Random
/// ```
///
/// With default thresholds (100, 21, 9, 2):
/// - **101+ candidates**: `PureEntropy` - Pure entropy maximization
/// - **22-100 candidates**: `EntropyMinimax` - Entropy + minimax tiebreakers
/// - **10-21 candidates**: `Hybrid` - Hybrid scoring (entropy × 100) - (`max_partition` × 10)
/// - **3-9 candidates**: `MinimaxFirst` - Minimax-first with 0.1 epsilon
/// - **1-2 candidates**: `Random` - Random selection from candidates
#[derive(Debug, Clone)]
pub struct AdaptiveStrategy {
    /// Candidates > this use `PureEntropy` (default: 100)
    pub pure_entropy_threshold: usize,

    /// Candidates > this use `EntropyMinimax` (default: 21)
    pub entropy_minimax_threshold: usize,

    /// Candidates > this use `Hybrid` (default: 9)
    pub hybrid_threshold: usize,

    /// Candidates > this use `MinimaxFirst` (default: 2)
    pub minimax_first_threshold: usize,
}

impl AdaptiveStrategy {
    /// Create a new adaptive strategy with custom thresholds
    #[must_use]
    pub const fn new(
        pure_entropy_threshold: usize,
        entropy_minimax_threshold: usize,
        hybrid_threshold: usize,
        minimax_first_threshold: usize,
    ) -> Self {
        Self {
            pure_entropy_threshold,
            entropy_minimax_threshold,
            hybrid_threshold,
            minimax_first_threshold,
        }
    }

    /// Get the current tier based on number of candidates
    #[must_use]
    pub const fn get_tier(&self, num_candidates: usize) -> AdaptiveTier {
        if num_candidates > self.pure_entropy_threshold {
            AdaptiveTier::PureEntropy
        } else if num_candidates > self.entropy_minimax_threshold {
            AdaptiveTier::EntropyMinimax
        } else if num_candidates > self.hybrid_threshold {
            AdaptiveTier::Hybrid
        } else if num_candidates > self.minimax_first_threshold {
            AdaptiveTier::MinimaxFirst
        } else {
            AdaptiveTier::Random
        }
    }
}

impl Default for AdaptiveStrategy {
    /// Default thresholds tuned for 99.7-99.8% optimal performance
    fn default() -> Self {
        Self::new(
            100, // pure_entropy_threshold: 101+ candidates
            21,  // entropy_minimax_threshold: 22-100 candidates
            9,   // hybrid_threshold: 10-21 candidates
            2,   // minimax_first_threshold: 3-9 candidates (1-2 use Random)
        )
    }
}

/// The current tier/phase of the adaptive strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveTier {
    /// Many candidates (101+): Pure entropy maximization
    PureEntropy,

    /// Medium candidates (22-100): Entropy + minimax tiebreakers
    EntropyMinimax,

    /// Few candidates (10-21): Hybrid scoring
    Hybrid,

    /// Very few (3-9): Minimax-first with candidate preference
    MinimaxFirst,

    /// Endgame (1-2): Random selection from candidates
    Random,
}

impl Strategy for AdaptiveStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Word], candidates: &[Word]) -> Option<&'a Word> {
        let tier = self.get_tier(candidates.len());

        // Create reference vectors once
        let guess_refs: Vec<&Word> = guess_pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        // Helper to find word in guess_pool by text comparison
        let find_in_pool = |word: &Word| guess_pool.iter().find(|w| w.text() == word.text());

        match tier {
            AdaptiveTier::PureEntropy => {
                // 101+ candidates: Pure entropy maximization
                let (best, _) = super::entropy::select_best_guess(&guess_refs, &candidate_refs)?;
                find_in_pool(best)
            }

            AdaptiveTier::EntropyMinimax => {
                // 22-100 candidates: Entropy + minimax tiebreakers
                selection::select_with_expected_tiebreaker(&guess_refs, &candidate_refs)
                    .and_then(find_in_pool)
            }

            AdaptiveTier::Hybrid => {
                // 10-21 candidates: Hybrid scoring
                selection::select_with_hybrid_scoring(&guess_refs, &candidate_refs)
                    .and_then(find_in_pool)
            }

            AdaptiveTier::MinimaxFirst => {
                // 3-9 candidates: Minimax-first with 0.1 epsilon
                selection::select_minimax_first(&guess_refs, &candidate_refs, 0.1)
                    .and_then(find_in_pool)
            }

            AdaptiveTier::Random => {
                // 1-2 candidates: Random selection
                super::strategy::RandomStrategy.select_guess(guess_pool, candidates)
            }
        }
    }
}
