//! The filter stage: consults `Lookup.correct` and discards whatever
//! the dictionary rejects, before anything is normalized or deduped.

use crate::lookup::{CorrectOpts, Lookup};
use crate::suggest::{Candidate, Suggestion};

/// Accept `candidate` iff it (or, for a multi-word candidate, every one
/// of its words) satisfies `lookup.correct` under `compounds` mode.
/// Returns the single-text suggestions to carry forward: a `Single`
/// candidate becomes itself; a `Multi` candidate becomes the
/// space-joined suggestion, plus the dash-joined one when `allow_dash`.
pub fn filter_candidate(
    candidate: Candidate,
    lookup: &Lookup,
    compounds: bool,
) -> Vec<Suggestion> {
    let opts = CorrectOpts {
        caps: false,
        allow_no_suggest: false,
        affix_forms: !compounds,
        compound_forms: compounds,
    };

    match candidate {
        Candidate::Single(sugg) => {
            if lookup.correct(&sugg.text, opts) {
                vec![sugg]
            } else {
                Vec::new()
            }
        }
        Candidate::Multi(multi) => {
            let all_correct = multi.words.iter().all(|w| lookup.correct(w, opts));
            if !all_correct {
                return Vec::new();
            }
            let mut out = vec![Suggestion::new(multi.space_joined(), multi.kind)];
            if multi.allow_dash {
                out.push(Suggestion::new(multi.dash_joined(), multi.kind));
            }
            out
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aff::Aff;
    use crate::dic::Dic;
    use crate::suggest::{MultiWordSuggestion, SuggestionKind};

    fn fixture() -> (Aff, Dic) {
        let aff = Aff::from_str("SET UTF-8\n").unwrap();
        let dic = Dic::from_str("2\na\nlot\n", &aff).unwrap();
        (aff, dic)
    }

    #[test]
    fn test_single_accept_reject() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        let good = Candidate::Single(Suggestion::new("a", SuggestionKind::BadChar));
        assert_eq!(filter_candidate(good, &lookup, false).len(), 1);
        let bad = Candidate::Single(Suggestion::new("zz", SuggestionKind::BadChar));
        assert_eq!(filter_candidate(bad, &lookup, false).len(), 0);
    }

    #[test]
    fn test_multi_accept_yields_both_joins() {
        let (aff, dic) = fixture();
        let lookup = Lookup::new(&aff, &dic);
        let multi = Candidate::Multi(MultiWordSuggestion::new(
            vec!["a".to_string(), "lot".to_string()],
            SuggestionKind::ReplChars,
            true,
        ));
        let accepted = filter_candidate(multi, &lookup, false);
        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].text, "a lot");
        assert_eq!(accepted[1].text, "a-lot");
    }
}
