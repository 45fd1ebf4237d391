use proptest::prelude::*;
use telegraph_compression::CompressionEngine;
use telegraph_core::annotation::{PosTag, Sentence, Token};
use telegraph_core::policy::RemovalPolicy;
use telegraph_core::traits::ICompressor;

/// Categories the default policy always drops, plus punctuation, which the
/// filter drops on its flag.
fn arb_removable_pos() -> impl Strategy<Value = PosTag> {
    prop_oneof![
        Just(PosTag::Det),
        Just(PosTag::Adp),
        Just(PosTag::Aux),
        Just(PosTag::Pron),
        Just(PosTag::Cconj),
        Just(PosTag::Sconj),
        Just(PosTag::Part),
        Just(PosTag::Punct),
    ]
}

/// Words that cannot collide with the default surface drop set.
fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("not a dropped surface form", |w| {
        !matches!(w.as_str(), "like" | "just" | "really")
    })
}

fn removable_token(word: String, pos: PosTag) -> Token {
    Token::new(word.clone(), word, pos)
}

proptest! {
    #[test]
    fn fully_removable_sentences_never_produce_chunks(
        sentences in prop::collection::vec(
            prop::collection::vec((arb_word(), arb_removable_pos()), 1..8),
            0..5,
        )
    ) {
        let sentences: Vec<Sentence> = sentences
            .into_iter()
            .map(|tokens| {
                Sentence::new(
                    tokens
                        .into_iter()
                        .map(|(word, pos)| removable_token(word, pos))
                        .collect(),
                )
            })
            .collect();

        let engine = CompressionEngine::new();
        let compressed = engine.compress(&sentences, &RemovalPolicy::default()).unwrap();

        prop_assert!(compressed.is_empty());
        prop_assert_eq!(compressed.render(), ".");
    }

    #[test]
    fn retained_lemmas_keep_their_original_order(
        words in prop::collection::vec((arb_word(), any::<bool>()), 1..12)
    ) {
        let tokens: Vec<Token> = words
            .iter()
            .map(|(word, retained)| {
                let pos = if *retained { PosTag::Noun } else { PosTag::Det };
                Token::new(word.clone(), word.clone(), pos)
            })
            .collect();
        let expected: Vec<&str> = words
            .iter()
            .filter(|(_, retained)| *retained)
            .map(|(word, _)| word.as_str())
            .collect();

        let engine = CompressionEngine::new();
        let compressed = engine
            .compress(&[Sentence::new(tokens)], &RemovalPolicy::default())
            .unwrap();

        if expected.is_empty() {
            prop_assert!(compressed.is_empty());
        } else {
            prop_assert_eq!(compressed.chunks(), &[expected.join(" ")]);
        }
    }

    #[test]
    fn chunk_count_never_exceeds_sentence_count(
        sentences in prop::collection::vec(
            prop::collection::vec((arb_word(), any::<bool>()), 0..6),
            0..6,
        )
    ) {
        let sentences: Vec<Sentence> = sentences
            .into_iter()
            .map(|tokens| {
                Sentence::new(
                    tokens
                        .into_iter()
                        .map(|(word, retained)| {
                            let pos = if retained { PosTag::Verb } else { PosTag::Adp };
                            Token::new(word.clone(), word, pos)
                        })
                        .collect(),
                )
            })
            .collect();

        let engine = CompressionEngine::new();
        let compressed = engine.compress(&sentences, &RemovalPolicy::default()).unwrap();

        prop_assert!(compressed.len() <= sentences.len());
        prop_assert!(compressed.render().ends_with('.'));
    }

    #[test]
    fn low_information_surfaces_never_survive(
        form in prop_oneof![
            Just("like"),
            Just("just"),
            Just("really"),
            Just("basically"),
            Just("literally"),
        ],
        casing in 0u8..3,
        pos in prop_oneof![Just(PosTag::Noun), Just(PosTag::Verb), Just(PosTag::Adv)],
    ) {
        let surface = match casing {
            0 => form.to_string(),
            1 => form.to_uppercase(),
            _ => {
                let mut chars = form.chars();
                let first = chars.next().unwrap().to_uppercase().to_string();
                format!("{first}{}", chars.as_str())
            }
        };

        let sentence = Sentence::new(vec![Token::new(surface, form, pos)]);
        let engine = CompressionEngine::new();
        let compressed = engine
            .compress(&[sentence], &RemovalPolicy::default())
            .unwrap();

        prop_assert!(compressed.is_empty());
    }
}
