//! End-to-end extraction scenarios over the full train/extract lifecycle.

use std::collections::HashSet;

use quillon::extractor::{ExtractorConfig, KeyphraseExtractor, ScoringStrategy};

fn gold(phrases: &[&str]) -> HashSet<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

/// A config with the positional gates relaxed, suited to the short
/// documents used in these scenarios.
fn short_doc_config() -> ExtractorConfig {
    ExtractorConfig {
        min_token_length: 3,
        first_cutoff: 1.0,
        spread_cutoff: 1.0,
        ..Default::default()
    }
}

#[test]
fn multiword_phrase_outranks_its_constituents() {
    let mut extractor = KeyphraseExtractor::new(ExtractorConfig {
        rerank_cooccurrences: false,
        synthesize: false,
        ..short_doc_config()
    })
    .unwrap();

    extractor
        .train(
            "The quick fox hunts at dawn. Farmers fear the quick fox.",
            &gold(&["quick fox"]),
        )
        .unwrap();
    extractor
        .train(
            "Lazy dogs sleep through the afternoon heat.",
            &gold(&["lazy dog"]),
        )
        .unwrap();
    extractor.end_training().unwrap();

    let keyphrases = extractor
        .extract("The quick fox jumped the fence. The quick fox escaped.")
        .unwrap();

    assert!(!keyphrases.is_empty());
    // squared term count and the keyphrase prior push the bigram to the top
    assert_eq!(keyphrases[0].value(), "quick fox");
    let single = keyphrases.iter().find(|k| k.value() == "fox").unwrap();
    assert!(keyphrases[0].weight() > single.weight());
}

#[test]
fn trained_prior_ranks_gold_bigram_first() {
    let mut extractor = KeyphraseExtractor::new(short_doc_config()).unwrap();

    extractor
        .train("the quick brown fox", &gold(&["quick fox"]))
        .unwrap();
    extractor
        .train("a quick cat and a fox", &gold(&["quick fox", "cat"]))
        .unwrap();
    extractor.end_training().unwrap();

    let keyphrases = extractor.extract("a very quick fox ran").unwrap();

    let rank = |value: &str| keyphrases.iter().position(|k| k.value() == value);
    let bigram = rank("quick fox").expect("bigram missing from results");
    for single in ["very", "quick", "fox", "ran"] {
        if let Some(pos) = rank(single) {
            assert!(bigram < pos, "'quick fox' ranked below '{single}'");
        }
    }
}

#[test]
fn extraction_is_deterministic() {
    let mut extractor = KeyphraseExtractor::new(short_doc_config()).unwrap();
    extractor
        .train(
            "Compilers translate source code into machine code.",
            &gold(&["compilers", "machine code"]),
        )
        .unwrap();
    extractor
        .train(
            "Interpreters execute source code directly.",
            &gold(&["interpreters", "source code"]),
        )
        .unwrap();
    extractor.end_training().unwrap();

    let doc = "Modern compilers optimize machine code aggressively.";
    let first = extractor.extract(doc).unwrap();
    let second = extractor.extract(doc).unwrap();
    let third = extractor.extract(doc).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn result_count_never_exceeds_configured_k() {
    let doc = "Databases store rows in pages. Databases cache pages in buffers. \
        Query planners estimate costs. Indexes speed lookups. Transactions \
        isolate writers from readers. Logs make recovery possible.";

    for k in [0, 1, 3, 25] {
        let mut extractor = KeyphraseExtractor::new(ExtractorConfig {
            keyphrase_count: k,
            ..short_doc_config()
        })
        .unwrap();
        extractor.train(doc, &gold(&["databases"])).unwrap();
        extractor.end_training().unwrap();

        assert!(extractor.extract(doc).unwrap().len() <= k);
    }
}

#[test]
fn synthesis_surfaces_associated_phrase_absent_from_document() {
    let mut extractor = KeyphraseExtractor::new(ExtractorConfig {
        // bigram candidates keep the seed phrase at the head of the ranking
        max_ngram_size: 2,
        ..short_doc_config()
    })
    .unwrap();

    // "machine learning" and "neural networks" are assigned together twice,
    // which clears the joint-count floor for synthesis
    for text in [
        "Machine learning with neural networks drives modern vision systems.",
        "Neural networks remain the dominant machine learning architecture.",
    ] {
        extractor
            .train(text, &gold(&["machine learning", "neural networks"]))
            .unwrap();
    }
    extractor
        .train(
            "Relational algebra underpins query languages.",
            &gold(&["relational algebra"]),
        )
        .unwrap();
    extractor.end_training().unwrap();

    let keyphrases = extractor
        .extract("Machine learning models generalize from training data. Machine learning needs data.")
        .unwrap();

    // the stemmed form of "neural networks" never occurs in the document
    assert!(keyphrases.iter().any(|k| k.value() == "neural network"));
}

#[test]
fn synthesized_results_contain_no_duplicates() {
    let mut extractor = KeyphraseExtractor::new(short_doc_config()).unwrap();
    for _ in 0..3 {
        extractor
            .train(
                "Streams carry events between processing stages.",
                &gold(&["streams", "events"]),
            )
            .unwrap();
    }
    extractor.end_training().unwrap();

    let keyphrases = extractor
        .extract("Streams buffer events before the stages drain them.")
        .unwrap();

    let mut seen = HashSet::new();
    for keyphrase in &keyphrases {
        assert!(
            seen.insert(keyphrase.value().to_string()),
            "duplicate keyphrase: {}",
            keyphrase.value()
        );
    }
}

#[test]
fn reranking_promotes_cooccurring_pair() {
    let train_docs = [
        "Caches reduce latency. Shards spread load.",
        "Shards without caches overload the primary.",
        "Caches and shards together keep tail latency flat.",
    ];

    let mut with_rerank = KeyphraseExtractor::new(short_doc_config()).unwrap();
    let mut without_rerank = KeyphraseExtractor::new(ExtractorConfig {
        rerank_cooccurrences: false,
        synthesize: false,
        ..short_doc_config()
    })
    .unwrap();

    for extractor in [&mut with_rerank, &mut without_rerank] {
        for doc in &train_docs {
            extractor.train(doc, &gold(&["caches", "shards"])).unwrap();
        }
        extractor.end_training().unwrap();
    }

    let doc = "Caches serve hot keys while shards hold the cold data.";
    let reranked = with_rerank.extract(doc).unwrap();
    let plain = without_rerank.extract(doc).unwrap();

    let weight = |keyphrases: &[quillon::keyphrase::Keyphrase], value: &str| {
        keyphrases
            .iter()
            .find(|k| k.value() == value)
            .map(|k| k.weight())
    };

    // the pair reinforces itself only when reranking is on
    if let (Some(boosted), Some(base)) = (weight(&reranked, "cach"), weight(&plain, "cach")) {
        assert!(boosted >= base);
    }
}

#[test]
fn classifier_lifecycle_round_trip() {
    let mut extractor = KeyphraseExtractor::new(ExtractorConfig {
        scoring: ScoringStrategy::Classifier,
        rerank_cooccurrences: false,
        synthesize: false,
        ..short_doc_config()
    })
    .unwrap();

    let docs = [
        ("Compilers translate source code into machine code. Compilers matter.", "compilers"),
        ("Interpreters execute programs directly without compilation.", "interpreters"),
        ("Garbage collectors reclaim unused memory automatically.", "garbage collectors"),
    ];
    for (text, keyphrase) in docs {
        extractor.train(text, &gold(&[keyphrase])).unwrap();
    }
    extractor.end_training().unwrap();

    // trained classifier extraction must succeed and respect the cap
    let keyphrases = extractor
        .extract("Compilers produce fast machine code for many targets.")
        .unwrap();
    assert!(keyphrases.len() <= extractor.keyphrase_count());
    for keyphrase in &keyphrases {
        assert!(keyphrase.weight() >= 0.5 && keyphrase.weight() <= 1.0);
    }
}

#[test]
fn model_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let mut extractor = KeyphraseExtractor::new(short_doc_config()).unwrap();
    extractor
        .train(
            "Distributed consensus keeps replicas consistent.",
            &gold(&["distributed consensus"]),
        )
        .unwrap();
    extractor
        .train(
            "Leader election picks a coordinator among replicas.",
            &gold(&["leader election"]),
        )
        .unwrap();
    extractor.end_training().unwrap();
    extractor.save_model(&path).unwrap();

    let loaded = KeyphraseExtractor::load_model(&path).unwrap();
    let doc = "Distributed consensus requires a stable leader election protocol.";
    assert_eq!(loaded.extract(doc).unwrap(), extractor.extract(doc).unwrap());
}
