//! The affix-file model (`Aff`): the collaborator spec.md §6 describes as
//! exposing flags, tables (`REP`, `MAP`, `KEY`, `TRY`, `PHONE`, `PFX`,
//! `SFX`), `OCONV`, numeric knobs, and the `casing` submodule.
//!
//! Grounded on the teacher's `hunspell/parse_aff.rs` (line-oriented nom
//! parser), `hunspell/condition.rs` (affix conditions), `hunspell/
//! compoundrule.rs` (`COMPOUNDRULE`), `hunspell/replacements.rs` (`REP`),
//! and `affix_trie.rs` (prefix/suffix tries), extended to cover the rest
//! of the tables the suggestion engine needs.

pub mod affix_trie;
pub mod casing;
pub mod compoundrule;
pub mod condition;
pub mod flag;
pub mod parse;
pub mod phone;
pub mod replacements;
pub mod wordflags;

use std::path::Path;

use anyhow::Result;
use fnv::{FnvHashMap, FnvHashSet};

use crate::aff::affix_trie::{PrefixTrie, SuffixTrie};
use crate::aff::compoundrule::CompoundRule;
use crate::aff::condition::AffixCondition;
use crate::aff::flag::{AffixFlag, FlagMode};
use crate::aff::phone::PhoneTable;
use crate::aff::replacements::Replacements;

#[derive(Clone, Debug)]
pub struct AffixRule {
    pub flag: AffixFlag,
    /// Text removed from the end (suffix) or start (prefix) of the stem.
    /// Empty string for Hunspell's `0`.
    pub strip: String,
    /// Text added in its place. Empty string for Hunspell's `0`.
    pub affix: String,
    pub condition: AffixCondition,
}

/// One `PFX` or `SFX` block: all the rules sharing one continuation flag
/// letter, plus whether they combine with affixes on the other side
/// (`crossProduct`).
#[derive(Clone, Debug, Default)]
pub struct AffixTable {
    pub cross_product: FnvHashSet<AffixFlag>,
    pub rules: Vec<AffixRule>,
    pub by_flag: FnvHashMap<AffixFlag, Vec<usize>>,
}

impl AffixTable {
    fn push(&mut self, rule: AffixRule, cross_product: bool) {
        if cross_product {
            self.cross_product.insert(rule.flag);
        }
        let idx = self.rules.len();
        self.by_flag.entry(rule.flag).or_default().push(idx);
        self.rules.push(rule);
    }
}

#[derive(Default)]
pub struct Aff {
    pub flag_mode: FlagMode,

    // Flags. `None` means the affix file never assigned one.
    pub forbiddenword: Option<AffixFlag>,
    pub nosuggest: Option<AffixFlag>,
    pub onlyincompound: Option<AffixFlag>,
    pub keepcase: Option<AffixFlag>,
    pub forceucase: Option<AffixFlag>,
    pub warn: Option<AffixFlag>,
    pub compoundbegin: Option<AffixFlag>,
    pub compoundmiddle: Option<AffixFlag>,
    pub compoundend: Option<AffixFlag>,
    pub compoundpermit: Option<AffixFlag>,
    pub compoundflag: Option<AffixFlag>,
    pub circumfix: Option<AffixFlag>,
    pub needaffix: Option<AffixFlag>,

    // Tables.
    pub rep: Replacements,
    pub map: Vec<String>,
    pub key: String,
    pub try_chars: String,
    pub phone: PhoneTable,
    pub prefixes: AffixTable,
    pub suffixes: AffixTable,
    pub oconv: Option<Replacements>,
    pub compoundrules: Vec<CompoundRule>,

    // Tries over affix text, used to decompose a surface word back into
    // stem + affix when checking correctness (spec.md §6 Lookup.correct).
    pub prefix_trie: PrefixTrie<usize>,
    pub suffix_trie: SuffixTrie<usize>,

    // Numeric/boolean knobs.
    pub compound_min: u8,
    pub maxcpdsugs: usize,
    pub maxngramsugs: usize,
    pub maxdiff: usize,
    pub onlymaxdiff: bool,
    pub nosplitsugs: bool,
}

impl std::fmt::Debug for Aff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aff")
            .field("try_chars", &self.try_chars)
            .field("key", &self.key)
            .field("prefix_rules", &self.prefixes.rules.len())
            .field("suffix_rules", &self.suffixes.rules.len())
            .finish()
    }
}

impl Aff {
    pub fn from_str(text: &str) -> Result<Self> {
        parse::parse_affix_data(text)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    /// Whether the `TRY` alphabet suggests dash-joined word splits are
    /// worth trying. Preserved verbatim per spec.md §9's open question:
    /// Hunspell derives this from `TRY` containing `-` or `a`, which the
    /// source calls "dumb but how Hunspell does it" — we do not
    /// generalize or second-guess it.
    pub fn dashes(&self) -> bool {
        self.try_chars.contains('-') || self.try_chars.contains('a')
    }

    /// Enumerate surface forms obtainable from `root` (which carries
    /// `flags`) by applying at most one prefix and/or one suffix rule
    /// whose continuation flag the root carries and whose condition the
    /// root satisfies. Used by the n-gram builder (spec.md §4.6) to
    /// consider affixed forms of dictionary stems, and mirrors the
    /// teacher's (stubbed) `generate_words_from_root`.
    pub fn generate_words_from_root(
        &self,
        root: &str,
        flags: &[AffixFlag],
        needs_affix: bool,
        mut emit: impl FnMut(&str),
    ) {
        if !needs_affix {
            emit(root);
        }

        let mut prefixed: Vec<String> = Vec::new();
        for &flag in flags {
            if let Some(idxs) = self.prefixes.by_flag.get(&flag) {
                for &idx in idxs {
                    let rule = &self.prefixes.rules[idx];
                    if root.len() < rule.strip.len() || !root.starts_with(&rule.strip) {
                        continue;
                    }
                    let rest = &root[rule.strip.len()..];
                    if !rule.condition.prefix_match(rest) {
                        continue;
                    }
                    let mut s = rule.affix.clone();
                    s.push_str(rest);
                    emit(&s);
                    if self.prefixes.cross_product.contains(&flag) {
                        prefixed.push(s);
                    }
                }
            }
        }

        for &flag in flags {
            if let Some(idxs) = self.suffixes.by_flag.get(&flag) {
                for &idx in idxs {
                    let rule = &self.suffixes.rules[idx];
                    if root.len() < rule.strip.len() || !root.ends_with(&rule.strip) {
                        continue;
                    }
                    let stemlen = root.len() - rule.strip.len();
                    let stem = &root[..stemlen];
                    if !rule.condition.suffix_match(stem) {
                        continue;
                    }
                    let mut s = stem.to_string();
                    s.push_str(&rule.affix);
                    emit(&s);

                    if self.suffixes.cross_product.contains(&flag) {
                        for pform in &prefixed {
                            if pform.len() < rule.strip.len() || !pform.ends_with(&rule.strip) {
                                continue;
                            }
                            let stemlen2 = pform.len() - rule.strip.len();
                            let pstem = &pform[..stemlen2];
                            if !rule.condition.suffix_match(pstem) {
                                continue;
                            }
                            let mut combo = pstem.to_string();
                            combo.push_str(&rule.affix);
                            emit(&combo);
                        }
                    }
                }
            }
        }
    }

    /// Try to strip a known prefix off `word`, yielding `(stem, flag)`
    /// pairs for every rule whose affix text and condition match.
    pub fn strip_prefixes(&self, word: &str) -> Vec<(String, AffixFlag)> {
        let mut out = Vec::new();
        self.prefix_trie.lookup(word, |idx| {
            let rule = &self.prefixes.rules[idx];
            if word.starts_with(&rule.affix) {
                let mut stem = rule.strip.clone();
                stem.push_str(&word[rule.affix.len()..]);
                if rule.condition.prefix_match(&stem) {
                    out.push((stem, rule.flag));
                }
            }
            false
        });
        out
    }

    /// Same as `strip_prefixes` but for suffixes.
    pub fn strip_suffixes(&self, word: &str) -> Vec<(String, AffixFlag)> {
        let mut out = Vec::new();
        self.suffix_trie.lookup(word, |idx| {
            let rule = &self.suffixes.rules[idx];
            if word.ends_with(&rule.affix) {
                let stemlen = word.len() - rule.affix.len();
                let mut stem = word[..stemlen].to_string();
                stem.push_str(&rule.strip);
                if rule.condition.suffix_match(&stem) {
                    out.push((stem, rule.flag));
                }
            }
            false
        });
        out
    }
}
