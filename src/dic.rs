//! The dictionary store (`Dic`): spec.md §6 describes it as exposing an
//! iterable `words` collection and `hasFlag`. Grounded on the shape the
//! teacher's n-gram scan already assumes (`dict.words.par_iter()` over
//! `(root, homonyms)` pairs in `hunspell/suggestions.rs`).

use anyhow::Result;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::path::Path;

use crate::aff::flag::AffixFlag;
use crate::aff::wordflags::WordFlags;
use crate::aff::Aff;

#[derive(Clone, Debug, Default)]
pub struct WordEntry {
    /// Raw continuation/semantic flags attached to this dictionary line,
    /// e.g. `S` in `cats/S`.
    pub flags: Vec<AffixFlag>,
    /// The subset of `flags` that `Aff` assigns a recognized meaning to.
    pub word_flags: WordFlags,
}

impl WordEntry {
    fn new(flags: Vec<AffixFlag>, aff: &Aff) -> Self {
        let mut word_flags = WordFlags::empty();
        let has = |f: Option<AffixFlag>| f.map(|f| flags.contains(&f)).unwrap_or(false);
        word_flags.set(WordFlags::Forbidden, has(aff.forbiddenword));
        word_flags.set(WordFlags::NoSuggest, has(aff.nosuggest));
        word_flags.set(WordFlags::OnlyInCompound, has(aff.onlyincompound));
        word_flags.set(WordFlags::KeepCase, has(aff.keepcase));
        word_flags.set(WordFlags::Warn, has(aff.warn));
        word_flags.set(WordFlags::CompoundBegin, has(aff.compoundbegin));
        word_flags.set(WordFlags::CompoundMiddle, has(aff.compoundmiddle));
        word_flags.set(WordFlags::CompoundEnd, has(aff.compoundend));
        word_flags.set(WordFlags::CompoundPermit, has(aff.compoundpermit));
        word_flags.set(WordFlags::CompoundFlag, has(aff.compoundflag));
        word_flags.set(WordFlags::Circumfix, has(aff.circumfix));
        word_flags.set(WordFlags::NeedAffix, has(aff.needaffix));
        WordEntry { flags, word_flags }
    }
}

#[derive(Default)]
pub struct Dic {
    pub words: FnvHashMap<String, SmallVec<[WordEntry; 1]>>,
    /// Precomputed once at construction: every root whose flags are
    /// disjoint from `{FORBIDDENWORD, NOSUGGEST, ONLYINCOMPOUND}`, per
    /// spec.md §3's "NgramWords set". Never mutated afterwards.
    pub ngram_words: Vec<String>,
}

impl Dic {
    pub fn from_str(text: &str, aff: &Aff) -> Result<Self> {
        let mut words: FnvHashMap<String, SmallVec<[WordEntry; 1]>> = FnvHashMap::default();

        let mut lines = text.lines();
        // First line is a word-count hint; Hunspell readers tolerate it
        // being wrong, so we don't rely on it beyond skipping it.
        let _count_hint = lines.next();

        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            // Morphological fields (e.g. `st:` `po:` tags) are
            // tab-separated and not consulted by the suggestion engine.
            let line = line.split('\t').next().unwrap_or(line);
            let (word, flag_str) = match line.split_once('/') {
                Some((w, f)) => (w, f),
                None => (line, ""),
            };
            if word.is_empty() {
                continue;
            }
            let flags = aff.flag_mode.parse(flag_str)?;
            let entry = WordEntry::new(flags, aff);
            words.entry(word.to_string()).or_default().push(entry);
        }

        let bad = WordFlags::Forbidden | WordFlags::NoSuggest | WordFlags::OnlyInCompound;
        let ngram_words: Vec<String> = words
            .iter()
            .filter(|(_, entries)| entries.iter().all(|e| !e.word_flags.intersects(bad)))
            .map(|(root, _)| root.clone())
            .collect();

        Ok(Dic { words, ngram_words })
    }

    pub fn from_path(path: &Path, aff: &Aff) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_str(&text, aff)
    }

    pub fn has_flag(&self, text: &str, flag: WordFlags) -> bool {
        self.words
            .get(text)
            .map(|entries| entries.iter().any(|e| e.word_flags.contains(flag)))
            .unwrap_or(false)
    }

    pub fn entries(&self, text: &str) -> &[WordEntry] {
        self.words.get(text).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aff::Aff;

    #[test]
    fn test_parse_basic_dic() {
        let aff_text = "SET UTF-8\nNOSUGGEST !\n";
        let aff = Aff::from_str(aff_text).unwrap();
        let dic_text = "3\nhello\nworld/!\ncat/S\n";
        let dic = Dic::from_str(dic_text, &aff).unwrap();
        assert!(dic.words.contains_key("hello"));
        assert!(dic.has_flag("world", WordFlags::NoSuggest));
        assert!(!dic.ngram_words.contains(&"world".to_string()));
        assert!(dic.ngram_words.contains(&"hello".to_string()));
    }
}
