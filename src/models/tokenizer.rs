use crate::types::Token;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    lowercase: bool,
    min_ngram: usize,
    max_ngram: usize,
}

impl Tokenizer {
    /// Configuration for single-word (unigram) tokens
    pub const fn word_parser() -> Self {
        Self {
            lowercase: true,
            min_ngram: 1,
            max_ngram: 1,
        }
    }

    /// Configuration emitting every n-gram for `n` in `min_n..=max_n`
    pub fn ngram_parser(min_n: usize, max_n: usize) -> Self {
        Self::word_parser().with_ngram_range(min_n, max_n)
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.min_ngram = min_n;
        self.max_ngram = max_n.max(min_n);
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        (self.min_ngram, self.max_ngram)
    }

    /// Lazily splits `text` into normalized words.
    ///
    /// Words are separated by any character that is neither alphanumeric nor an apostrophe.
    /// Apostrophes are kept inside words ("don't") and trimmed from their edges, so quoted and
    /// punctuation-only segments disappear.
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        let lowercase = self.lowercase;

        text.split(|c: char| !(c.is_alphanumeric() || is_apostrophe(c)))
            .map(|segment| segment.trim_matches(is_apostrophe))
            .filter(|segment| !segment.is_empty())
            .map(move |segment| {
                if lowercase {
                    segment.to_lowercase()
                } else {
                    segment.to_string()
                }
            })
    }

    /// Lazily produces the configured tokens for `text`.
    ///
    /// For the unigram configuration this streams straight from `words`; n-grams need a window
    /// over the word sequence, so the words are buffered first.
    pub fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = Token> + 'a> {
        if self.min_ngram == 1 && self.max_ngram == 1 {
            return Box::new(self.words(text));
        }

        let words: Vec<Token> = self.words(text).collect();
        let (min_n, max_n) = (self.min_ngram, self.max_ngram);

        let ngrams: Vec<Token> = (min_n..=max_n)
            .flat_map(|n| {
                words
                    .windows(n)
                    .map(|window| window.join(" "))
                    .collect::<Vec<_>>()
            })
            .collect();

        Box::new(ngrams.into_iter())
    }

    /// Tokenizer function to split the text into individual tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokens(text).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::word_parser()
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}
