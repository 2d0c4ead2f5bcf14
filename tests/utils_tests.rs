use std::collections::HashMap;
use test_utils::assert_approx_eq;
use text_regression::utils::{mean_and_std_err, soft_threshold, sort_by_frequency};
use text_regression::{default_penalty_grid, default_stop_words, penalty_grid};

#[cfg(test)]
mod penalty_grid_tests {
    use super::*;

    #[test]
    fn test_log_spaced_and_inclusive() {
        let grid = penalty_grid(5, 1e-4, 1.0);

        assert_eq!(grid.len(), 5);
        for (value, expected) in grid.iter().zip([1e-4, 1e-3, 1e-2, 1e-1, 1.0]) {
            assert_approx_eq(*value, expected, expected * 1e-9);
        }
    }

    #[test]
    fn test_degenerate_level_counts() {
        assert!(penalty_grid(0, 1e-4, 1.0).is_empty());
        assert_eq!(penalty_grid(1, 1e-3, 1.0), vec![1e-3]);
    }

    #[test]
    fn test_default_grid() {
        let grid = default_penalty_grid();

        assert_eq!(grid.len(), 50);
        assert_approx_eq(grid[0], 1e-4, 1e-12);
        assert_approx_eq(grid[49], 1.0, 1e-9);
        assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[cfg(test)]
mod mean_and_std_err_tests {
    use super::*;

    #[test]
    fn test_mean_and_std_err() {
        let (mean, std_err) = mean_and_std_err(&[2.0, 4.0, 6.0, 8.0]);

        assert_eq!(mean, 5.0);
        // sample variance 20 / 3, over 4 observations
        assert_approx_eq(std_err, (20.0f64 / 3.0 / 4.0).sqrt(), 1e-12);
    }

    #[test]
    fn test_skips_non_finite_values() {
        let (mean, _) = mean_and_std_err(&[1.0, f64::NAN, 3.0, f64::INFINITY]);

        assert_eq!(mean, 2.0);
    }

    #[test]
    fn test_empty_and_single() {
        let (mean, std_err) = mean_and_std_err(&[]);
        assert!(mean.is_nan() && std_err.is_nan());

        let (mean, std_err) = mean_and_std_err(&[7.0]);
        assert_eq!(mean, 7.0);
        assert!(std_err.is_nan());
    }
}

#[cfg(test)]
mod soft_threshold_tests {
    use super::*;

    #[test]
    fn test_soft_threshold() {
        assert_eq!(soft_threshold(3.0, 1.0), 2.0);
        assert_eq!(soft_threshold(-3.0, 1.0), -2.0);
        assert_eq!(soft_threshold(0.5, 1.0), 0.0);
        assert_eq!(soft_threshold(-1.0, 1.0), 0.0);
        assert_eq!(soft_threshold(0.5, 0.0), 0.5);
    }
}

#[cfg(test)]
mod sort_by_frequency_tests {
    use super::*;

    #[test]
    fn test_sorts_by_frequency_then_token() {
        let frequencies: HashMap<String, usize> = [("beta", 2), ("alpha", 2), ("gamma", 5)]
            .into_iter()
            .map(|(token, frequency)| (token.to_string(), frequency))
            .collect();

        let sorted = sort_by_frequency(frequencies);

        assert_eq!(
            sorted,
            vec![
                ("gamma".to_string(), 5),
                ("alpha".to_string(), 2),
                ("beta".to_string(), 2)
            ]
        );
    }
}

#[cfg(test)]
mod stop_words_tests {
    use super::*;

    #[test]
    fn test_default_stop_words() {
        let stop_words = default_stop_words();

        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("and"));
        assert!(!stop_words.contains("court"));
        assert!(stop_words.iter().all(|word| *word == word.to_lowercase()));
    }
}
