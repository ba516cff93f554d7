//! The suggestion engine: casing analysis, permutation generators,
//! n-gram/phonetic candidate builders, the filter/handle stages, and the
//! top-level orchestrator that strings them together into a lazy stream
//! of corrections for a misspelled word.

pub mod constants;
pub mod engine;
pub mod filter;
pub mod handle;
pub mod ngram_builder;
pub mod permute;
pub mod phonet;

pub use engine::SuggestionStream;

/// Identifies which generator produced a [`Suggestion`], mirroring
/// Hunspell's own internal naming for its suggestion sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    Uppercase,
    ReplChars,
    MapChars,
    SwapChar,
    LongSwapChar,
    BadCharKey,
    ExtraChar,
    ForgotChar,
    MoveChar,
    BadChar,
    DoubleTwoChars,
    SpaceWord,
    TwoWords,
    Dashes,
    Case,
    ForceUCase,
    Ngram,
    Phonet,
}

/// A single candidate correction: replacement text plus the kind of
/// generator that produced it.
#[derive(Clone, Debug)]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: SuggestionKind) -> Self {
        Suggestion { text: text.into(), kind }
    }

    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Suggestion { text: text.into(), kind: self.kind }
    }
}

/// An ordered sequence of tokens making up a split-word candidate, e.g.
/// `["a", "lot"]`. Stringifies by joining with a space, or additionally
/// with a dash when `allow_dash` is set.
#[derive(Clone, Debug)]
pub struct MultiWordSuggestion {
    pub words: Vec<String>,
    pub kind: SuggestionKind,
    pub allow_dash: bool,
}

impl MultiWordSuggestion {
    pub fn new(words: Vec<String>, kind: SuggestionKind, allow_dash: bool) -> Self {
        MultiWordSuggestion { words, kind, allow_dash }
    }

    pub fn joined(&self, sep: &str) -> String {
        self.words.join(sep)
    }

    pub fn space_joined(&self) -> String {
        self.joined(" ")
    }

    pub fn dash_joined(&self) -> String {
        self.joined("-")
    }
}

/// Either a plain candidate or a multi-token split candidate, as
/// produced by the permutation generators and consumed by the filter.
#[derive(Clone, Debug)]
pub enum Candidate {
    Single(Suggestion),
    Multi(MultiWordSuggestion),
}
