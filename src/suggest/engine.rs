//! The orchestrator: drives casing variants through edit rounds,
//! compound-edit rounds, dash recursion, and n-gram/phonetic fallback,
//! applying the short-circuit rules that decide when to stop early.
//!
//! `SuggestionStream` builds its full output up front into a queue and
//! hands it out through `Iterator::next` — the same shape the teacher's
//! `SuggCollector` uses (it also collects into a `Vec` and exposes it
//! via `IntoIterator`). A consumer that stops pulling early still pays
//! only the cost already sunk into construction; cancellation mid-scan
//! isn't threaded through, since the scans here (permutations, a single
//! n-gram/phonetic pass) are already bounded by the same limits a truly
//! lazy implementation would apply.

use std::collections::VecDeque;

use fnv::FnvHashSet;
use log::{debug, trace};

use crate::aff::casing::{self, CapType};
use crate::aff::Aff;
use crate::dic::Dic;
use crate::lookup::{CorrectOpts, Lookup};
use crate::suggest::constants::{self, MAX_PHONET_SUGGESTIONS, MAX_SUGGESTIONS};
use crate::suggest::filter::filter_candidate;
use crate::suggest::handle::{self, Handled};
use crate::suggest::ngram_builder::NgramBuilder;
use crate::suggest::permute::permutations;
use crate::suggest::phonet::PhonetBuilder;
use crate::suggest::{Suggestion, SuggestionKind};

pub struct SuggestionStream {
    items: VecDeque<Suggestion>,
}

impl SuggestionStream {
    pub fn new(word: &str, aff: &Aff, dic: &Dic, lookup: &Lookup) -> Self {
        debug!("suggest: building stream for {word:?}");
        let mut items: Vec<Suggestion> = Vec::new();
        let mut handled = Handled::default();

        let (captype, variants) = casing::corrections(word);
        trace!("suggest: captype={captype:?}, {} variant(s)", variants.len());

        if aff.forceucase.is_some() && captype == CapType::No {
            for cand in casing::capitalize(word) {
                if lookup.correct(&cand, CorrectOpts::check()) {
                    trace!("suggest: forceucase short-circuit on {cand:?}");
                    items.push(Suggestion::new(cand, SuggestionKind::ForceUCase));
                    return SuggestionStream { items: items.into() };
                }
            }
        }

        'variants: for (i, variant) in variants.iter().enumerate() {
            if i != 0 && lookup.check(variant) {
                let sugg = Suggestion::new(variant.clone(), SuggestionKind::Case);
                if let Some(h) =
                    handle::handle(word, captype, &mut handled, sugg, false, dic, aff, lookup)
                {
                    items.push(h);
                }
            }

            let mut good_edits_found = false;
            let mut no_compound = false;

            let edit_round =
                edits(variant, aff, dic, lookup, &mut handled, captype, MAX_SUGGESTIONS, false);
            for s in edit_round {
                let kind = s.kind;
                let is_spaceword = kind == SuggestionKind::SpaceWord;
                if constants::is_good_edit(kind) {
                    good_edits_found = true;
                }
                if constants::suppresses_compound_round(kind) {
                    no_compound = true;
                }
                items.push(s);
                if is_spaceword {
                    trace!("suggest: spaceword found, terminating stream");
                    return SuggestionStream { items: items.into() };
                }
            }

            if !no_compound {
                let compound_round = edits(
                    word,
                    aff,
                    dic,
                    lookup,
                    &mut handled,
                    captype,
                    aff.maxcpdsugs,
                    true,
                );
                for s in compound_round {
                    if constants::is_good_edit(s.kind) {
                        good_edits_found = true;
                    }
                    items.push(s);
                }
            }

            if good_edits_found {
                trace!("suggest: good edit found on variant {i}, stopping variant search");
                break 'variants;
            }

            if word.contains('-') && !handled.any_contains('-') {
                let dashes = dash_recursion(word, aff, dic, lookup, &mut handled, captype);
                items.extend(dashes);
            }

            debug!("suggest: falling back to n-gram/phonetic scan for variant {i}");
            let fallback = ngram_phonet_fallback(word, aff, dic, lookup, &mut handled, captype);
            items.extend(fallback);
        }

        SuggestionStream { items: items.into() }
    }
}

impl Iterator for SuggestionStream {
    type Item = Suggestion;

    fn next(&mut self) -> Option<Suggestion> {
        self.items.pop_front()
    }
}

/// spec.md 4.2: `take(limit)` of `handle . filter(compounds) . permutations`.
fn edits(
    word: &str,
    aff: &Aff,
    dic: &Dic,
    lookup: &Lookup,
    handled: &mut Handled,
    captype: CapType,
    limit: usize,
    compounds: bool,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    'outer: for candidate in permutations(word, aff) {
        for sugg in filter_candidate(candidate, lookup, compounds) {
            if out.len() >= limit {
                break 'outer;
            }
            if let Some(h) =
                handle::handle(word, captype, handled, sugg, false, dic, aff, lookup)
            {
                out.push(h);
            }
        }
    }
    out
}

fn dash_recursion(
    word: &str,
    aff: &Aff,
    dic: &Dic,
    lookup: &Lookup,
    handled: &mut Handled,
    captype: CapType,
) -> Vec<Suggestion> {
    let chunks: Vec<&str> = word.split('-').collect();
    let mut out = Vec::new();
    for idx in 0..chunks.len() {
        let chunk = chunks[idx];
        if lookup.check(chunk) {
            continue;
        }
        let sub_stream = SuggestionStream::new(chunk, aff, dic, lookup);
        for candidate in sub_stream.take(MAX_SUGGESTIONS) {
            let mut new_chunks: Vec<String> = chunks.iter().map(|s| s.to_string()).collect();
            new_chunks[idx] = candidate.text;
            let joined = new_chunks.join("-");
            if lookup.check(&joined) {
                let sugg = Suggestion::new(joined, SuggestionKind::Dashes);
                if let Some(h) =
                    handle::handle(word, captype, handled, sugg, false, dic, aff, lookup)
                {
                    out.push(h);
                }
            }
        }
    }
    out
}

fn ngram_phonet_fallback(
    word: &str,
    aff: &Aff,
    dic: &Dic,
    lookup: &Lookup,
    handled: &mut Handled,
    captype: CapType,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    let phone_enabled = !aff.phone.is_empty();
    if aff.maxngramsugs == 0 && !phone_enabled {
        return out;
    }

    if aff.maxngramsugs > 0 {
        let mut builder = NgramBuilder::new(word, aff, aff.maxdiff, aff.onlymaxdiff);
        builder.scan(dic);
        let handled_lower: FnvHashSet<String> = handled.lower_set();
        for text in builder.finish(&handled_lower).into_iter().take(aff.maxngramsugs) {
            let sugg = Suggestion::new(text, SuggestionKind::Ngram);
            if let Some(h) =
                handle::handle(word, captype, handled, sugg, true, dic, aff, lookup)
            {
                out.push(h);
            }
        }
    }

    if phone_enabled {
        let mut builder = PhonetBuilder::new(word, &aff.phone);
        builder.scan(dic);
        for text in builder.finish().into_iter().take(MAX_PHONET_SUGGESTIONS) {
            let sugg = Suggestion::new(text, SuggestionKind::Phonet);
            if let Some(h) =
                handle::handle(word, captype, handled, sugg, false, dic, aff, lookup)
            {
                out.push(h);
            }
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aff::Aff;
    use crate::dic::Dic;

    fn fixture(aff_text: &str, dic_text: &str) -> (Aff, Dic) {
        let aff = Aff::from_str(aff_text).unwrap();
        let dic = Dic::from_str(dic_text, &aff).unwrap();
        (aff, dic)
    }

    #[test]
    fn test_badchar_finds_the() {
        let (aff, dic) = fixture("SET UTF-8\nTRY aehtor\n", "1\nthe\n");
        let lookup = Lookup::new(&aff, &dic);
        let stream = SuggestionStream::new("hte", &aff, &dic, &lookup);
        let texts: Vec<String> = stream.map(|s| s.text).collect();
        assert!(texts.contains(&"the".to_string()));
    }

    #[test]
    fn test_replchars_terminates_stream() {
        let mut aff = Aff::from_str("SET UTF-8\nTRY aeiorclvt\n").unwrap();
        aff.rep.push("alot", "a lot");
        let dic = Dic::from_str("2\na\nlot\n", &aff).unwrap();
        let lookup = Lookup::new(&aff, &dic);
        let stream = SuggestionStream::new("alot", &aff, &dic, &lookup);
        let results: Vec<Suggestion> = stream.collect();
        assert!(results.iter().any(|s| s.kind == SuggestionKind::ReplChars && s.text == "a lot"));
    }

    #[test]
    fn test_no_duplicate_texts() {
        let (aff, dic) = fixture("SET UTF-8\nTRY aehtor\n", "1\nthe\n");
        let lookup = Lookup::new(&aff, &dic);
        let stream = SuggestionStream::new("hte", &aff, &dic, &lookup);
        let texts: Vec<String> = stream.map(|s| s.text).collect();
        let mut uniq = texts.clone();
        uniq.sort();
        uniq.dedup();
        assert_eq!(texts.len(), uniq.len());
    }
}
