use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static OPINIONS_SAMPLE_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "opinions_sample.csv"));

/// Words that move a synthetic document's label, with their true effect.
pub const SIGNAL_WORDS: [(&str, f64); 8] = [
    ("excellent", 1.0),
    ("delightful", 1.0),
    ("superb", 1.0),
    ("wonderful", 1.0),
    ("dreadful", -1.0),
    ("boring", -1.0),
    ("clumsy", -1.0),
    ("tedious", -1.0),
];

/// Words with no effect on the label.
pub const FILLER_WORDS: [&str; 8] = [
    "plot", "actor", "scene", "movie", "story", "music", "ending", "camera",
];

pub const SYNTHETIC_BASE_LABEL: f64 = 3.0;
