// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A stable index into a `Vocabulary`. Coefficient `i` of a fitted model always refers to the
/// token with `TokenId` `i`.
pub type TokenId = usize;

/// Identifies a document within a corpus.
pub type DocumentId = String;

/// The continuous target value attached to a document (e.g. the year an opinion was written).
pub type Label = f64;

/// A fixed-length numeric array, one entry per vocabulary token.
pub type FeatureVector = Vec<f64>;

/// Regularization strength (lambda).
pub type Penalty = f64;

/// Blend between the L1 (`1.0`) and L2 (`0.0`) penalty terms.
pub type Mixture = f64;

/// Position of a document within the slice of documents it was taken from.
pub type DocumentIndex = usize;

pub type FoldIndex = usize;

/// Number of documents in which a token appears at least once.
pub type DocumentFrequency = usize;
