//! Property-based checks of the suggestion engine's cross-cutting
//! invariants: determinism, absence of duplicates or forbidden text,
//! `spaceword` terminality, and the `FORCEUCASE` short-circuit.

use huncheck::suggest::SuggestionKind;
use huncheck::HunspellChecker;
use proptest::prelude::*;

const AFF: &str = "\
SET UTF-8
TRY esiarntolcdugmphbyfvkwzESIARNTOLCDUGMPHBYFVKWZ'
KEY qwertyuiop|asdfghjkl|zxcvbnm
REP 1
REP hte the
FORBIDDENWORD !
SFX S Y 1
SFX S 0 s .
";

const DIC: &str = "\
8
the
cat/S
dog/S
house
boat
walk/S
forbidden/!
banned/!
";

fn checker() -> HunspellChecker {
    HunspellChecker::from_str(AFF, DIC).unwrap()
}

const FORCEUCASE_AFF: &str = "\
SET UTF-8
TRY aehtrsFG
FORCEUCASE F
";

const FORCEUCASE_DIC: &str = "\
1
Germany/F
";

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,10}"
}

proptest! {
    #[test]
    fn suggestions_are_deterministic(word in word_strategy()) {
        let checker = checker();
        let first: Vec<String> = checker.suggest(&word).map(|s| s.text).collect();
        let second: Vec<String> = checker.suggest(&word).map(|s| s.text).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn suggestions_have_no_duplicate_text(word in word_strategy()) {
        let checker = checker();
        let texts: Vec<String> = checker.suggest(&word).map(|s| s.text).collect();
        let mut uniq = texts.clone();
        uniq.sort();
        uniq.dedup();
        prop_assert_eq!(texts.len(), uniq.len());
    }

    #[test]
    fn suggestions_never_surface_forbidden_words(word in word_strategy()) {
        let checker = checker();
        let texts: Vec<String> = checker.suggest(&word).map(|s| s.text).collect();
        prop_assert!(!texts.iter().any(|t| t == "forbidden" || t == "banned"));
    }

    #[test]
    fn a_spaceword_suggestion_is_always_last(word in word_strategy()) {
        let checker = checker();
        let suggestions: Vec<_> = checker.suggest(&word).collect();
        if let Some(pos) = suggestions.iter().position(|s| s.kind == SuggestionKind::SpaceWord) {
            prop_assert_eq!(pos, suggestions.len() - 1);
        }
    }
}

#[test]
fn forceucase_short_circuits_on_already_correct_capitalization() {
    let checker = HunspellChecker::from_str(FORCEUCASE_AFF, FORCEUCASE_DIC).unwrap();
    let suggestions: Vec<_> = checker.suggest("germany").collect();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, SuggestionKind::ForceUCase);
    assert_eq!(suggestions[0].text, "Germany");
}

#[test]
fn good_edit_stops_further_variant_exploration() {
    // "hte" -> REP match "the" is a ReplChars good edit; once found, the
    // engine should not additionally explore recapitalized variants.
    let checker = checker();
    let suggestions: Vec<_> = checker.suggest("hte").collect();
    assert!(suggestions.iter().any(|s| s.kind == SuggestionKind::ReplChars && s.text == "the"));
}
