use crate::constants::{
    DEFAULT_PENALTY_GRID_LEVELS, DEFAULT_PENALTY_GRID_MAX, DEFAULT_PENALTY_GRID_MIN,
};
use crate::types::Penalty;

/// `levels` penalty values evenly spaced on a log10 scale from `min` to `max`, inclusive.
///
/// `min` and `max` must be positive; a single level yields `[min]`.
pub fn penalty_grid(levels: usize, min: Penalty, max: Penalty) -> Vec<Penalty> {
    match levels {
        0 => vec![],
        1 => vec![min],
        _ => {
            let (log_min, log_max) = (min.log10(), max.log10());
            let step = (log_max - log_min) / (levels - 1) as f64;

            (0..levels)
                .map(|level| 10f64.powf(log_min + step * level as f64))
                .collect()
        }
    }
}

/// 50 log-spaced penalties from `1e-4` to `1`.
pub fn default_penalty_grid() -> Vec<Penalty> {
    penalty_grid(
        DEFAULT_PENALTY_GRID_LEVELS,
        DEFAULT_PENALTY_GRID_MIN,
        DEFAULT_PENALTY_GRID_MAX,
    )
}
