//! The phonetic candidate builder: scores dictionary roots by how
//! closely their `PHONE`-transformed spelling matches the target's,
//! combined with plain orthographic similarity, the way Hunspell's
//! metaphone-adjacent suggester does.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::aff::phone::PhoneTable;
use crate::ngram::ngram;
use crate::suggest::constants::MAX_PHONET_SUGGESTIONS;

struct PhonetScore {
    text: String,
    score: usize,
}
impl PartialEq for PhonetScore {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}
impl Eq for PhonetScore {}
impl PartialOrd for PhonetScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for PhonetScore {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score)
    }
}

pub struct PhonetBuilder<'a> {
    word: Vec<char>,
    word_phone: Vec<char>,
    phone: &'a PhoneTable,
    heap: BinaryHeap<PhonetScore>,
}

impl<'a> PhonetBuilder<'a> {
    pub fn new(word: &str, phone: &'a PhoneTable) -> Self {
        let word_phone: Vec<char> = phone.transform(word).chars().collect();
        PhonetBuilder {
            word: word.chars().collect(),
            word_phone,
            phone,
            heap: BinaryHeap::with_capacity(MAX_PHONET_SUGGESTIONS + 1),
        }
    }

    /// Score one dictionary root: phonetic overlap weighted heavier
    /// than plain orthographic overlap, since that's the point of this
    /// builder over the n-gram one.
    pub fn step(&mut self, root: &str) {
        let root_phone: Vec<char> = self.phone.transform(root).chars().collect();
        let phonetic_score = ngram(2, &self.word_phone, &root_phone);
        if phonetic_score == 0 {
            return;
        }
        let rvec: Vec<char> = root.chars().collect();
        let ortho_score = ngram(2, &self.word, &rvec);
        let score = phonetic_score * 2 + ortho_score;

        if self.heap.len() == MAX_PHONET_SUGGESTIONS {
            if score <= self.heap.peek().unwrap().score {
                return;
            }
            self.heap.pop();
        }
        self.heap.push(PhonetScore { text: root.to_string(), score });
    }

    pub fn scan(&mut self, dic: &crate::dic::Dic) {
        for root in &dic.ngram_words {
            self.step(root);
        }
    }

    pub fn finish(self) -> Vec<String> {
        self.heap.into_sorted_vec().into_iter().map(|s| s.text).collect()
    }
}
