//! The n-gram candidate builder: scans a pre-filtered subset of the
//! dictionary, scoring each root by character-overlap similarity with
//! the target, then expands the best-scoring roots through PFX/SFX to
//! consider their surface forms too.
//!
//! Grounded on the teacher's `hunspell/suggestions.rs::ngram_suggestions`,
//! restructured into the `step`/`finish` shape the orchestrator expects.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fnv::FnvHashSet;

use crate::aff::flag::AffixFlag;
use crate::aff::Aff;
use crate::ngram::ngram;
use crate::suggest::constants::MAX_NGRAM_ROOTS;

const MAX_NGRAM_SUGG: usize = 20;

struct RootScore {
    root: String,
    flags: Vec<AffixFlag>,
    score: usize,
}

impl PartialEq for RootScore {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}
impl Eq for RootScore {}
impl PartialOrd for RootScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for RootScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on score: worse candidates pop first
        other.score.cmp(&self.score)
    }
}

struct SuggScore {
    text: String,
    score: usize,
}
impl PartialEq for SuggScore {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}
impl Eq for SuggScore {}
impl PartialOrd for SuggScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for SuggScore {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score)
    }
}

pub struct NgramBuilder<'a> {
    target: Vec<char>,
    heuristic: usize,
    aff: &'a Aff,
    maxdiff: usize,
    onlymaxdiff: bool,
    root_heap: BinaryHeap<RootScore>,
}

impl<'a> NgramBuilder<'a> {
    pub fn new(word: &str, aff: &'a Aff, maxdiff: usize, onlymaxdiff: bool) -> Self {
        let target: Vec<char> = word.to_lowercase().chars().collect();
        let heuristic = ngram(1, &target, &target);
        NgramBuilder {
            target,
            heuristic,
            aff,
            maxdiff,
            onlymaxdiff,
            root_heap: BinaryHeap::with_capacity(MAX_NGRAM_ROOTS + 1),
        }
    }

    /// Score one dictionary root against the target, keeping only the
    /// best `MAX_NGRAM_ROOTS` seen so far.
    pub fn step(&mut self, root: &str, flags: &[AffixFlag]) {
        if root.chars().count() > self.target.len() + 2 {
            return;
        }
        let rvec: Vec<char> = root.chars().collect();
        let score = ngram(3, &self.target, &rvec);
        if self.root_heap.len() == MAX_NGRAM_ROOTS {
            if score <= self.root_heap.peek().unwrap().score {
                return;
            }
            self.root_heap.pop();
        }
        self.root_heap.push(RootScore { root: root.to_string(), flags: flags.to_vec(), score });
    }

    /// Convenience over `step`: scan every root in `dic.ngram_words`,
    /// unioning flags across homonyms.
    pub fn scan(&mut self, dic: &crate::dic::Dic) {
        for root in &dic.ngram_words {
            let flags: Vec<AffixFlag> =
                dic.entries(root).iter().flat_map(|e| e.flags.iter().copied()).collect();
            self.step(root, &flags);
        }
    }

    /// Expand the best roots through PFX/SFX, score every surface form,
    /// and return up to `MAX_NGRAM_SUGG` candidates ordered by
    /// descending score. `handled` (lowercased) roots are skipped.
    pub fn finish(self, handled_lower: &FnvHashSet<String>) -> Vec<String> {
        let NgramBuilder { target, heuristic, aff, maxdiff, onlymaxdiff, root_heap } = self;
        let roots = root_heap.into_sorted_vec();

        let mut sugg_heap: BinaryHeap<SuggScore> = BinaryHeap::with_capacity(MAX_NGRAM_SUGG + 1);
        let mut uniq: FnvHashSet<String> = FnvHashSet::default();
        let cutoff = if onlymaxdiff { Some(maxdiff) } else { None };

        for RootScore { root, flags, .. } in roots {
            if handled_lower.contains(&root.to_lowercase()) {
                continue;
            }
            aff.generate_words_from_root(&root, &flags, false, |sugg| {
                if uniq.contains(sugg) {
                    return;
                }
                uniq.insert(sugg.to_string());
                let svec: Vec<char> = sugg.chars().collect();
                let score = ngram(3, &target, &svec);
                if score <= heuristic {
                    return;
                }
                if let Some(max) = cutoff {
                    let diff = heuristic.saturating_sub(score);
                    if diff > max {
                        return;
                    }
                }
                if sugg_heap.len() == MAX_NGRAM_SUGG {
                    if score <= sugg_heap.peek().unwrap().score {
                        return;
                    }
                    sugg_heap.pop();
                }
                sugg_heap.push(SuggScore { text: sugg.to_string(), score });
            });
        }

        sugg_heap.into_sorted_vec().into_iter().map(|s| s.text).collect()
    }
}
