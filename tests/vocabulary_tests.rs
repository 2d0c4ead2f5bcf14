use std::collections::HashSet;
use text_regression::{build_vocabulary, Document, Error, Tokenizer, Vocabulary};

fn documents(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(format!("d{}", i), *text, i as f64).unwrap())
        .collect()
}

fn stop_words(words: &[&str]) -> HashSet<String> {
    words.iter().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod vocabulary_tests {
    use super::*;

    #[test]
    fn test_ranks_by_document_frequency() {
        let docs = documents(&["apple banana", "apple cherry cherry", "the apple banana"]);

        let vocabulary = build_vocabulary(&docs, &stop_words(&["the"]), 10).unwrap();

        assert_eq!(vocabulary.tokens(), &["apple", "banana", "cherry"]);
        assert_eq!(vocabulary.document_frequency(0), Some(3));
        assert_eq!(vocabulary.document_frequency(1), Some(2));
        // Repeats within a document count once
        assert_eq!(vocabulary.document_frequency(2), Some(1));
        assert_eq!(vocabulary.n_documents(), 3);
    }

    #[test]
    fn test_ties_are_broken_lexicographically() {
        let docs = documents(&["zebra yak", "xylophone"]);

        let vocabulary = build_vocabulary(&docs, &HashSet::new(), 10).unwrap();

        assert_eq!(vocabulary.tokens(), &["xylophone", "yak", "zebra"]);
    }

    #[test]
    fn test_truncates_to_max_tokens() {
        let docs = documents(&["apple banana", "apple cherry", "apple banana durian"]);

        let vocabulary = build_vocabulary(&docs, &HashSet::new(), 2).unwrap();

        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.tokens(), &["apple", "banana"]);
        assert_eq!(vocabulary.get_token_id("cherry"), None);
    }

    #[test]
    fn test_stop_words_are_excluded() {
        let docs = documents(&["the court and the jury", "a jury of peers"]);

        let vocabulary =
            build_vocabulary(&docs, &stop_words(&["the", "and", "a", "of"]), 10).unwrap();

        assert_eq!(vocabulary.tokens(), &["jury", "court", "peers"]);
    }

    #[test]
    fn test_token_lookup_both_ways() {
        let docs = documents(&["apple banana", "apple"]);

        let vocabulary = build_vocabulary(&docs, &HashSet::new(), 10).unwrap();

        let token_id = vocabulary.get_token_id("banana").unwrap();
        assert_eq!(vocabulary.get_token_by_id(token_id), Some("banana"));
        assert_eq!(vocabulary.get_token_by_id(99), None);
        assert_eq!(vocabulary.get_token_id("durian"), None);
    }

    #[test]
    fn test_idf_values() {
        let docs = documents(&["apple banana", "apple", "apple cherry", "apple banana"]);

        let vocabulary = build_vocabulary(&docs, &HashSet::new(), 10).unwrap();
        let idf_values = vocabulary.idf_values();

        // apple is in every document and carries no information
        assert_eq!(idf_values[0], 0.0);
        assert!((idf_values[1] - (4.0f64 / 2.0).ln()).abs() < 1e-12);
        assert!((idf_values[2] - (4.0f64 / 1.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_everything_filtered_is_empty_vocabulary_error() {
        let docs = documents(&["the and a", "of the"]);

        let result = build_vocabulary(&docs, &stop_words(&["the", "and", "a", "of"]), 10);

        assert!(matches!(result, Err(Error::EmptyVocabularyError(_))));
    }

    #[test]
    fn test_no_documents_is_empty_vocabulary_error() {
        let result = build_vocabulary(&[], &HashSet::new(), 10);

        assert!(matches!(result, Err(Error::EmptyVocabularyError(_))));
    }

    #[test]
    fn test_zero_max_tokens_is_empty_vocabulary_error() {
        let docs = documents(&["apple"]);

        let result = build_vocabulary(&docs, &HashSet::new(), 0);

        assert!(matches!(result, Err(Error::EmptyVocabularyError(_))));
    }

    #[test]
    fn test_ngrams_containing_stop_words_are_dropped() {
        let docs = documents(&["the cat sat", "a cat sat down"]);
        let tokenizer = Tokenizer::ngram_parser(1, 2);

        let vocabulary =
            Vocabulary::build(&tokenizer, &docs, &stop_words(&["the", "a"]), 20).unwrap();

        assert!(vocabulary.get_token_id("cat sat").is_some());
        assert!(vocabulary.get_token_id("sat down").is_some());
        assert!(vocabulary.get_token_id("the cat").is_none());
        assert!(vocabulary.get_token_id("a cat").is_none());
        assert_eq!(vocabulary.tokens()[..3], ["cat", "cat sat", "sat"]);
    }

    #[test]
    fn test_stop_words_match_regardless_of_case() {
        let docs = documents(&["The Court ruled", "the Jury agreed with THE Court"]);
        let tokenizer = Tokenizer::word_parser().with_lowercase(false);

        let vocabulary = Vocabulary::build(&tokenizer, &docs, &stop_words(&["The"]), 20).unwrap();

        assert!(vocabulary.get_token_id("The").is_none());
        assert!(vocabulary.get_token_id("the").is_none());
        assert!(vocabulary.get_token_id("THE").is_none());
        assert!(vocabulary.get_token_id("Court").is_some());
        assert_eq!(vocabulary.document_frequency(0), Some(2));
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocabulary = Vocabulary::empty();

        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.len(), 0);
        assert!(vocabulary.idf_values().is_empty());
    }
}
