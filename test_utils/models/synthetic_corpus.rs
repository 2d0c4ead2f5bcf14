use crate::constants::{FILLER_WORDS, SIGNAL_WORDS, SYNTHETIC_BASE_LABEL};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use text_regression::Document;

/// A generated corpus whose labels are a known linear function of word presence.
///
/// Every document holds one to four distinct signal words and two to five distinct filler words.
/// Each word appears at most once, so term-frequency weights are proportional to presence.
pub struct SyntheticCorpus {
    pub documents: Vec<Document>,
    pub noise: f64,
}

impl SyntheticCorpus {
    pub fn generate(n_documents: usize, noise: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let documents = (0..n_documents)
            .map(|i| {
                let n_signal = rng.gen_range(1..=4);
                let n_filler = rng.gen_range(2..=5);

                let signal: Vec<&(&str, f64)> =
                    SIGNAL_WORDS.choose_multiple(&mut rng, n_signal).collect();
                let filler: Vec<&&str> =
                    FILLER_WORDS.choose_multiple(&mut rng, n_filler).collect();

                let mut words: Vec<&str> = signal
                    .iter()
                    .map(|(word, _)| *word)
                    .chain(filler.iter().map(|word| **word))
                    .collect();
                words.shuffle(&mut rng);

                let jitter = if noise > 0.0 {
                    rng.gen_range(-noise..noise)
                } else {
                    0.0
                };

                let label = SYNTHETIC_BASE_LABEL
                    + signal.iter().map(|(_, weight)| weight).sum::<f64>()
                    + jitter;

                Document::new(format!("doc-{}", i), words.join(" "), label)
                    .expect("synthetic labels are finite")
            })
            .collect();

        SyntheticCorpus { documents, noise }
    }

    /// The label a document would get without noise.
    pub fn true_label(text: &str) -> f64 {
        SYNTHETIC_BASE_LABEL
            + text
                .split_whitespace()
                .filter_map(|word| {
                    SIGNAL_WORDS
                        .iter()
                        .find(|(signal, _)| *signal == word)
                        .map(|(_, weight)| weight)
                })
                .sum::<f64>()
    }
}
