//! Tuning constants shared across the suggestion engine. Values mirror
//! Hunspell's own defaults for the equivalents it ships with its parent
//! checker.

use super::SuggestionKind;

/// Per-variant cap on edit-round suggestions.
pub const MAX_SUGGESTIONS: usize = 15;

/// Cap on phonetic-builder output.
pub const MAX_PHONET_SUGGESTIONS: usize = 2;

/// Cap on how many dictionary roots the n-gram/phonetic scan keeps
/// before expanding them through PFX/SFX.
pub const MAX_NGRAM_ROOTS: usize = 100;

/// A suggestion kind strong enough that no further variants are worth
/// exploring once one has been emitted.
pub fn is_good_edit(kind: SuggestionKind) -> bool {
    matches!(kind, SuggestionKind::ReplChars | SuggestionKind::MapChars)
}

/// A suggestion kind that rules out the compound-edit round, since a
/// plain edit already found something strong enough.
pub fn suppresses_compound_round(kind: SuggestionKind) -> bool {
    matches!(
        kind,
        SuggestionKind::Uppercase | SuggestionKind::ReplChars | SuggestionKind::MapChars
    )
}
