use crate::types::{DocumentIndex, FoldIndex};
use crate::{Document, Error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// One cross-validation iteration: the validation indices are exactly one fold, the training
/// indices are the union of all other folds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldSplit {
    pub fold: FoldIndex,
    pub train_indices: Vec<DocumentIndex>,
    pub validation_indices: Vec<DocumentIndex>,
}

impl FoldSplit {
    /// Deterministically partitions `n_documents` indices into `k` folds.
    ///
    /// Indices are shuffled with a `StdRng` seeded by `seed`, then dealt into contiguous folds.
    /// The first `n_documents % k` folds get one extra index, so fold sizes differ by at most
    /// one.
    pub fn collect_fold_splits(
        n_documents: usize,
        k: usize,
        seed: u64,
    ) -> Result<Vec<FoldSplit>, Error> {
        if k < 2 {
            return Err(Error::InsufficientDataError(format!(
                "Cross-validation needs at least 2 folds, got {}",
                k
            )));
        }

        if n_documents < k {
            return Err(Error::InsufficientDataError(format!(
                "Cannot split {} documents into {} folds",
                n_documents, k
            )));
        }

        let indices = shuffled_indices(n_documents, seed);

        let fold_size = n_documents / k;
        let remainder = n_documents % k;

        let mut fold_splits = Vec::with_capacity(k);
        let mut start = 0;

        for fold in 0..k {
            let current_fold_size = if fold < remainder {
                fold_size + 1
            } else {
                fold_size
            };
            let end = start + current_fold_size;

            let validation_indices = indices[start..end].to_vec();

            let mut train_indices = Vec::with_capacity(n_documents - current_fold_size);
            train_indices.extend_from_slice(&indices[..start]);
            train_indices.extend_from_slice(&indices[end..]);

            fold_splits.push(FoldSplit {
                fold,
                train_indices,
                validation_indices,
            });

            start = end;
        }

        Ok(fold_splits)
    }

    pub fn training_documents(&self, documents: &[Document]) -> Vec<Document> {
        select_documents(documents, &self.train_indices)
    }

    pub fn validation_documents(&self, documents: &[Document]) -> Vec<Document> {
        select_documents(documents, &self.validation_indices)
    }
}

/// Seeded train/test split. The first `floor(n * prop)` shuffled documents go to training.
///
/// Both halves keep the documents' original relative order.
pub fn initial_split(
    documents: &[Document],
    prop: f64,
    seed: u64,
) -> Result<(Vec<Document>, Vec<Document>), Error> {
    if !(prop > 0.0 && prop < 1.0) {
        return Err(Error::InvalidInputError(format!(
            "Training proportion must be within (0, 1), got {}",
            prop
        )));
    }

    let n_documents = documents.len();
    let n_train = (n_documents as f64 * prop).floor() as usize;

    if n_train == 0 || n_train == n_documents {
        return Err(Error::InsufficientDataError(format!(
            "Splitting {} documents at proportion {} leaves an empty side",
            n_documents, prop
        )));
    }

    let indices = shuffled_indices(n_documents, seed);

    let mut train_indices = indices[..n_train].to_vec();
    let mut test_indices = indices[n_train..].to_vec();
    train_indices.sort_unstable();
    test_indices.sort_unstable();

    Ok((
        select_documents(documents, &train_indices),
        select_documents(documents, &test_indices),
    ))
}

fn shuffled_indices(n: usize, seed: u64) -> Vec<DocumentIndex> {
    let mut indices: Vec<DocumentIndex> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices
}

fn select_documents(documents: &[Document], indices: &[DocumentIndex]) -> Vec<Document> {
    indices.iter().map(|&idx| documents[idx].clone()).collect()
}
