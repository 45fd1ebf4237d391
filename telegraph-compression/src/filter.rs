//! The telegraphic filtering pass: drop predictable grammar, keep content.

use telegraph_core::annotation::{Sentence, Token};
use telegraph_core::policy::RemovalPolicy;

/// Whether a token survives the policy.
///
/// Three independent checks: the coarse tag must not be a dropped category,
/// the surface text (not the lemma) must not be a dropped form, and the
/// token must not be punctuation. Punctuation is dropped on its flag even
/// when `PUNCT` is absent from the policy's category set.
pub fn retain(token: &Token, policy: &RemovalPolicy) -> bool {
    !policy.drops_pos(token.pos) && !policy.drops_surface(&token.text) && !token.is_punct
}

/// Filter one sentence down to its retained lemmas, space-joined, in the
/// original token order.
///
/// `None` when nothing survives: a fully filtered sentence contributes no
/// chunk rather than an empty one.
pub fn filter_sentence(sentence: &Sentence, policy: &RemovalPolicy) -> Option<String> {
    let lemmas: Vec<&str> = sentence
        .tokens
        .iter()
        .filter(|token| retain(token, policy))
        .map(|token| token.lemma.as_str())
        .collect();

    if lemmas.is_empty() {
        None
    } else {
        Some(lemmas.join(" "))
    }
}
