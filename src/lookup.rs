//! The spelling-check oracle (`Lookup`): spec.md §6 describes `correct`,
//! `check` and `isForbidden`. Everything the suggestion engine asks of
//! the dictionary funnels through here.
//!
//! Scope note: this is deliberately not a full Hunspell compound-rule
//! evaluator. `correct(..., compound_forms: true)` recognizes simple
//! two-stem compounds gated by `COMPOUNDBEGIN`/`COMPOUNDMIDDLE`/
//! `COMPOUNDEND`/`COMPOUNDFLAG` and `COMPOUNDMIN`, which is enough for
//! the compound-edit round (spec.md §4.1 step 3c) to behave meaningfully
//! without reimplementing `COMPOUNDRULE` pattern matching in full.

use crate::aff::wordflags::WordFlags;
use crate::aff::Aff;
use crate::dic::Dic;

#[derive(Clone, Copy, Debug)]
pub struct CorrectOpts {
    pub caps: bool,
    pub allow_no_suggest: bool,
    pub affix_forms: bool,
    pub compound_forms: bool,
}

impl CorrectOpts {
    pub fn check() -> Self {
        CorrectOpts { caps: true, allow_no_suggest: true, affix_forms: true, compound_forms: true }
    }

    pub fn affix_round() -> Self {
        CorrectOpts { caps: false, allow_no_suggest: false, affix_forms: true, compound_forms: false }
    }

    pub fn compound_round() -> Self {
        CorrectOpts { caps: false, allow_no_suggest: false, affix_forms: false, compound_forms: true }
    }
}

pub struct Lookup<'a> {
    pub aff: &'a Aff,
    pub dic: &'a Dic,
}

impl<'a> Lookup<'a> {
    pub fn new(aff: &'a Aff, dic: &'a Dic) -> Self {
        Lookup { aff, dic }
    }

    /// Plain spell check: is `word` correct under the most permissive
    /// settings? (spec.md §6 `Lookup.check`)
    pub fn check(&self, word: &str) -> bool {
        self.correct(word, CorrectOpts::check())
    }

    /// Is `text` explicitly forbidden? (spec.md §6 `Lookup.isForbidden`,
    /// invariant in §3: "Forbidden texts never appear").
    pub fn is_forbidden(&self, text: &str) -> bool {
        self.dic.has_flag(text, WordFlags::Forbidden)
    }

    /// The correctness oracle every generated candidate is checked
    /// against, per spec.md §4.4 and the invariant in §3 that every
    /// emitted suggestion would pass `correct` before normalization.
    pub fn correct(&self, word: &str, opts: CorrectOpts) -> bool {
        if word.is_empty() {
            return false;
        }

        if let Some(entries) = self.dic.words.get(word) {
            if entries.iter().any(|e| e.word_flags.contains(WordFlags::Forbidden)) {
                return false;
            }
            for e in entries {
                if e.word_flags.contains(WordFlags::NeedAffix) {
                    continue;
                }
                if e.word_flags.contains(WordFlags::OnlyInCompound) {
                    continue;
                }
                if e.word_flags.contains(WordFlags::NoSuggest) && !opts.allow_no_suggest {
                    continue;
                }
                return true;
            }
        }

        if opts.affix_forms && self.check_affixed(word) {
            return true;
        }

        if opts.compound_forms && self.check_compound(word) {
            return true;
        }

        false
    }

    fn stem_takes_continuation(&self, stem: &str, flag: crate::aff::flag::AffixFlag) -> bool {
        match self.dic.words.get(stem) {
            None => false,
            Some(entries) => entries.iter().any(|e| {
                !e.word_flags.contains(WordFlags::Forbidden) && e.flags.contains(&flag)
            }),
        }
    }

    fn check_affixed(&self, word: &str) -> bool {
        for (stem, flag) in self.aff.strip_suffixes(word) {
            if self.stem_takes_continuation(&stem, flag) {
                return true;
            }
        }
        for (stem, flag) in self.aff.strip_prefixes(word) {
            if self.stem_takes_continuation(&stem, flag) {
                return true;
            }
        }
        false
    }

    /// Recognize `word` as a two-stem compound: some non-empty prefix is
    /// a valid compound-begin stem and the remaining suffix is a valid
    /// compound-end stem, both at least `COMPOUNDMIN` characters long.
    fn check_compound(&self, word: &str) -> bool {
        let min = self.aff.compound_min.max(1) as usize;
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < min * 2 {
            return false;
        }
        for split in min..=chars.len() - min {
            let left: String = chars[..split].iter().collect();
            let right: String = chars[split..].iter().collect();
            if self.is_compound_begin(&left) && self.is_compound_end(&right) {
                return true;
            }
        }
        false
    }

    fn is_compound_begin(&self, word: &str) -> bool {
        self.dic
            .words
            .get(word)
            .map(|entries| {
                entries.iter().any(|e| {
                    !e.word_flags.contains(WordFlags::Forbidden)
                        && (e.word_flags.contains(WordFlags::CompoundBegin)
                            || e.word_flags.contains(WordFlags::CompoundFlag))
                })
            })
            .unwrap_or(false)
    }

    fn is_compound_end(&self, word: &str) -> bool {
        self.dic
            .words
            .get(word)
            .map(|entries| {
                entries.iter().any(|e| {
                    !e.word_flags.contains(WordFlags::Forbidden)
                        && (e.word_flags.contains(WordFlags::CompoundEnd)
                            || e.word_flags.contains(WordFlags::CompoundFlag))
                })
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aff::Aff;
    use crate::dic::Dic;

    fn fixture() -> (Aff, Dic) {
        let aff_text =
            "SET UTF-8\nFORBIDDENWORD !\nCOMPOUNDFLAG C\nCOMPOUNDMIN 3\nSFX S Y 1\nSFX S 0 s .\n";
        let aff = Aff::from_str(aff_text).unwrap();
        let dic_text = "3\ncat/SC\nhouse/C\nforbidden/!\n";
        let dic = Dic::from_str(dic_text, &aff).unwrap();
        (aff, dic)
    }

    #[test]
    fn test_direct_and_affixed_correctness() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        assert!(lookup.check("cat"));
        assert!(lookup.check("cats"));
        assert!(!lookup.check("dog"));
    }

    #[test]
    fn test_forbidden() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        assert!(lookup.is_forbidden("forbidden"));
        assert!(!lookup.check("forbidden"));
    }

    #[test]
    fn test_compound() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        assert!(lookup.correct("cathouse", CorrectOpts::compound_round()));
    }
}
