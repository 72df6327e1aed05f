use proptest::prelude::*;
use rs_naive_bayes::{
    document_log_score, token_likelihood, tokenize, train, Document, NaiveBayes, TrainingCorpus,
};

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["buy", "cheap", "viagra", "friend", "york", "city", "king", ""])
        .prop_map(String::from)
}

fn label() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["HAM", "SPAM", "EGGS"]).prop_map(String::from)
}

fn corpus() -> impl Strategy<Value = TrainingCorpus> {
    prop::collection::vec((prop::collection::vec(token(), 0..8), label()), 1..20)
        .prop_map(|docs| {
            docs.into_iter()
                .map(|(tokens, label)| Document::new(tokens, label))
                .collect::<TrainingCorpus>()
        })
}

proptest! {
    #[test]
    fn priors_sum_to_one(corpus in corpus()) {
        let model = train(&corpus).unwrap();
        let sum: f64 = model.class_priors().values().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_likelihood_is_positive(corpus in corpus(), probe in "[a-z]{0,6}") {
        let model = train(&corpus).unwrap();
        for class in model.classes() {
            let p = token_likelihood(&model, &probe, class).unwrap();
            prop_assert!(p > 0.0 && p <= 1.0);
        }
    }

    #[test]
    fn presence_never_exceeds_class_documents(corpus in corpus()) {
        let model = train(&corpus).unwrap();
        for (tokens, label) in corpus.iter() {
            let count = model.class_count(label).unwrap();
            for t in tokens {
                let presence = model.presence(label, t);
                prop_assert!(presence >= 1 && presence <= count);
            }
        }
    }

    #[test]
    fn repeating_a_document_token_does_not_change_the_model(
        tokens in prop::collection::vec(token(), 1..6),
        label in label(),
        repeat in 2usize..5,
    ) {
        let once: TrainingCorpus = vec![Document::new(tokens.clone(), label.clone())].into_iter().collect();
        let mut repeated_tokens = tokens.clone();
        for _ in 1..repeat {
            repeated_tokens.push(tokens[0].clone());
        }
        let many: TrainingCorpus = vec![Document::new(repeated_tokens, label)].into_iter().collect();

        prop_assert_eq!(train(&once).unwrap(), train(&many).unwrap());
    }

    #[test]
    fn query_tokens_count_per_occurrence(corpus in corpus(), t in token()) {
        let model = train(&corpus).unwrap();
        for class in model.classes() {
            let one = document_log_score(&model, &[t.as_str()], class).unwrap();
            let two = document_log_score(&model, &[t.as_str(), t.as_str()], class).unwrap();
            prop_assert!(two <= one);
        }
    }

    #[test]
    fn classify_always_returns_a_trained_class(corpus in corpus(), text in "[a-z ]{0,30}") {
        let nb = NaiveBayes::train(&corpus).unwrap();
        let label = nb.classify(&text).unwrap();
        prop_assert!(nb.model().contains_class(&label));
        prop_assert_eq!(tokenize(&text).len(), text.matches(' ').count() + 1);
    }
}
