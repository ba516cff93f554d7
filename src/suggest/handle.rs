//! The handle stage: normalizes a filtered candidate's case, applies
//! OCONV, and de-duplicates against everything already emitted in the
//! current top-level call.

use std::collections::HashSet;

use crate::aff::casing::{self, CapType};
use crate::aff::wordflags::WordFlags;
use crate::aff::Aff;
use crate::dic::Dic;
use crate::lookup::Lookup;
use crate::suggest::Suggestion;

/// Everything already yielded in the current top-level `suggestions`
/// call. Monotone: a text once added is never removed.
#[derive(Default)]
pub struct Handled {
    texts: HashSet<String>,
    lower_texts: Vec<String>,
}

impl Handled {
    pub fn contains(&self, text: &str) -> bool {
        self.texts.contains(text)
    }

    pub fn insert(&mut self, text: &str) {
        self.texts.insert(text.to_string());
        self.lower_texts.push(text.to_lowercase());
    }

    fn any_is_substring_of(&self, lower_text: &str) -> bool {
        self.lower_texts.iter().any(|h| lower_text.contains(h.as_str()))
    }

    pub fn any_contains(&self, pat: char) -> bool {
        self.texts.iter().any(|t| t.contains(pat))
    }

    pub fn lower_set(&self) -> fnv::FnvHashSet<String> {
        self.lower_texts.iter().cloned().collect()
    }
}

/// Splice `word`'s casing of the character right after the first space
/// in `text`, when it differs from `text`'s own casing only by case.
/// Spec-preserved first-space-only behavior; multi-space strings are
/// left untouched.
fn splice_huh_case(text: &str, word: &str) -> String {
    if !text.contains(' ') {
        return text.to_string();
    }
    let text_chars: Vec<char> = text.chars().collect();
    let word_chars: Vec<char> = word.chars().collect();
    let p = text.chars().take_while(|&c| c != ' ').count();
    if p >= word_chars.len() || p + 1 >= text_chars.len() {
        return text.to_string();
    }
    let text_next = text_chars[p + 1];
    let word_char = word_chars[p];
    if text_next == word_char {
        return text.to_string();
    }
    let upper_next: String = text_next.to_uppercase().collect();
    if upper_next != word_char.to_string() {
        return text.to_string();
    }

    let mut out: Vec<char> = text_chars[..=p].to_vec();
    out.push(word_char);
    if p + 2 < word_chars.len() {
        out.extend_from_slice(&word_chars[p + 2..]);
    }
    out.into_iter().collect()
}

/// Normalize and dedup one already-dictionary-accepted suggestion.
/// Returns `None` if the suggestion should be discarded.
pub fn handle(
    word: &str,
    captype: CapType,
    handled: &mut Handled,
    suggestion: Suggestion,
    check_inclusion: bool,
    dic: &Dic,
    aff: &Aff,
    lookup: &Lookup,
) -> Option<Suggestion> {
    let mut text = suggestion.text.clone();

    if !(dic.has_flag(&text, WordFlags::KeepCase) || casing::is_sharps(&text)) {
        let coerced = casing::coerce(&text, captype);
        if coerced != text {
            if lookup.is_forbidden(&coerced) {
                // revert: keep the pre-coercion text
            } else {
                text = coerced;
            }
        }
        if matches!(captype, CapType::Huh | CapType::HuhInit) && text.contains(' ') {
            text = splice_huh_case(&text, word);
        }
    }

    if lookup.is_forbidden(&text) {
        return None;
    }

    if let Some(oconv) = &aff.oconv {
        text = oconv.conv(&text);
    }

    if handled.contains(&text) {
        return None;
    }

    if check_inclusion {
        let lower = text.to_lowercase();
        if handled.any_is_substring_of(&lower) {
            return None;
        }
    }

    handled.insert(&text);
    Some(suggestion.with_text(text))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aff::Aff;
    use crate::dic::Dic;
    use crate::suggest::SuggestionKind;

    fn fixture() -> (Aff, Dic) {
        let aff = Aff::from_str("SET UTF-8\nKEEPCASE K\n").unwrap();
        let dic = Dic::from_str("2\nthe\nMcDonald/K\n", &aff).unwrap();
        (aff, dic)
    }

    #[test]
    fn test_coerces_case_and_dedups() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        let mut handled = Handled::default();
        let s = Suggestion::new("the", SuggestionKind::BadChar);
        let out = handle("THE", CapType::All, &mut handled, s.clone(), false, &dic, &aff, &lookup);
        assert_eq!(out.unwrap().text, "THE");
        // Same text again is rejected.
        let out2 = handle("THE", CapType::All, &mut handled, s, false, &dic, &aff, &lookup);
        assert!(out2.is_none());
    }

    #[test]
    fn test_keepcase_is_not_coerced() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        let mut handled = Handled::default();
        let s = Suggestion::new("McDonald", SuggestionKind::BadChar);
        let out = handle("mcdonald", CapType::No, &mut handled, s, false, &dic, &aff, &lookup);
        assert_eq!(out.unwrap().text, "McDonald");
    }

    #[test]
    fn test_inclusion_dedup() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        let mut handled = Handled::default();
        handled.insert("the");
        let s = Suggestion::new("theater", SuggestionKind::Ngram);
        let out = handle("thx", CapType::No, &mut handled, s, true, &dic, &aff, &lookup);
        assert!(out.is_none());
    }
}
