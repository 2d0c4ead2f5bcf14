pub mod default_stop_words;
pub use default_stop_words::default_stop_words;

pub mod mean_and_std_err;
pub use mean_and_std_err::mean_and_std_err;

pub mod penalty_grid;
pub use penalty_grid::{default_penalty_grid, penalty_grid};

pub mod read_corpus;
pub use read_corpus::{read_corpus_from_path, read_corpus_from_reader, read_corpus_from_string};

pub mod soft_threshold;
pub use soft_threshold::soft_threshold;

pub mod sort_by_frequency;
pub use sort_by_frequency::sort_by_frequency;
