//! The workload shared by every strategy: the maximum absolute difference
//! between one focal value and every value in a reference dataset.

use thiserror::Error;

/// Error returned when a deviation is requested against an empty dataset.
///
/// An empty dataset has no maximum difference; earlier versions of this tool
/// silently returned a meaningless sentinel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compute a deviation against an empty dataset")]
pub struct EmptyInputError;

/// Computes the maximum of `(focal - other).abs()` over every `other` in
/// `data`.
///
/// Deterministic and side-effect free. `data` may or may not contain `focal`
/// itself; a dataset holding only `focal` yields exactly `0.0`.
pub fn max_deviation(focal: f64, data: &[f64]) -> Result<f64, EmptyInputError> {
    if data.is_empty() {
        return Err(EmptyInputError);
    }

    // Differences are absolute values, so 0.0 is a lower bound which any
    // real difference supersedes.
    let mut max = 0.0_f64;
    for other in data {
        let diff = (focal - other).abs();
        if diff > max {
            max = diff;
        }
    }

    Ok(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_defining_expression() {
        let data: [f64; 5] = [0.25, 0.5, 0.75, 1.5, -2.0];

        for &focal in &data {
            let expected = data
                .iter()
                .map(|other| (focal - other).abs())
                .fold(f64::MIN, f64::max);
            assert_eq!(max_deviation(focal, &data), Ok(expected));
        }
    }

    #[test]
    fn is_non_negative_for_values_drawn_from_the_data() {
        let data = [3.0, -1.0, 0.5, 0.5];

        for &focal in &data {
            assert!(max_deviation(focal, &data).unwrap() >= 0.0);
        }
    }

    #[test]
    fn known_deviations() {
        let data = [1.0, 2.0, 4.0];

        assert_eq!(max_deviation(1.0, &data), Ok(3.0));
        assert_eq!(max_deviation(2.0, &data), Ok(2.0));
        assert_eq!(max_deviation(4.0, &data), Ok(3.0));
    }

    #[test]
    fn single_matching_element_yields_zero() {
        assert_eq!(max_deviation(5.0, &[5.0]), Ok(0.0));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(max_deviation(1.0, &[]), Err(EmptyInputError));
    }
}
