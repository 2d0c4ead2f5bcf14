pub mod linear_data;
pub use linear_data::LinearData;

pub mod synthetic_corpus;
pub use synthetic_corpus::SyntheticCorpus;
