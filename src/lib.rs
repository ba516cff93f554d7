#![warn(missing_debug_implementations)]

pub mod aff;
pub mod dic;
pub mod lookup;
pub mod ngram;
pub mod suggest;

use std::path::Path;

use anyhow::Result;

use crate::aff::Aff;
use crate::dic::Dic;
use crate::lookup::Lookup;
use crate::suggest::SuggestionStream;

/// Ties an affix file and a dictionary file together into something
/// that can check words and produce correction suggestions for them.
pub struct HunspellChecker {
    aff: Aff,
    dic: Dic,
}

impl std::fmt::Debug for HunspellChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HunspellChecker").field("aff", &self.aff).finish()
    }
}

impl HunspellChecker {
    pub fn new(aff: Aff, dic: Dic) -> Self {
        HunspellChecker { aff, dic }
    }

    pub fn from_paths(aff_path: &Path, dic_path: &Path) -> Result<Self> {
        let aff = Aff::from_path(aff_path)?;
        let dic = Dic::from_path(dic_path, &aff)?;
        Ok(HunspellChecker { aff, dic })
    }

    pub fn from_str(aff_text: &str, dic_text: &str) -> Result<Self> {
        let aff = Aff::from_str(aff_text)?;
        let dic = Dic::from_str(dic_text, &aff)?;
        Ok(HunspellChecker { aff, dic })
    }

    /// Plain spell check.
    pub fn check(&self, word: &str) -> bool {
        Lookup::new(&self.aff, &self.dic).check(word)
    }

    /// A lazy, finite stream of correction suggestions for `word`.
    pub fn suggest(&self, word: &str) -> SuggestionStream {
        let lookup = Lookup::new(&self.aff, &self.dic);
        SuggestionStream::new(word, &self.aff, &self.dic, &lookup)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_and_suggest() {
        let checker = HunspellChecker::from_str(
            "SET UTF-8\nTRY aehtor\n",
            "1\nthe\n",
        )
        .unwrap();
        assert!(checker.check("the"));
        assert!(!checker.check("hte"));
        let texts: Vec<String> = checker.suggest("hte").map(|s| s.text).collect();
        assert!(texts.contains(&"the".to_string()));
    }
}
