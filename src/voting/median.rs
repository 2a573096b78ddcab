use crate::error::{DownsianError, Result};

/// Order-statistic median of an ascending slice: the middle value for odd
/// lengths, the mean of the two central values for even lengths.
pub fn median(sorted: &[f64]) -> Result<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(DownsianError::EmptyPopulation);
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_takes_middle_value() {
        assert_eq!(median(&[0.0, 0.25, 0.5, 0.75, 1.0]).unwrap(), 0.5);
        assert_eq!(median(&[0.3]).unwrap(), 0.3);
    }

    #[test]
    fn even_length_averages_central_pair() {
        assert_eq!(median(&[0.125, 0.25, 0.5, 0.875]).unwrap(), 0.375);
        assert_eq!(median(&[0.0, 1.0]).unwrap(), 0.5);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(median(&[]), Err(DownsianError::EmptyPopulation)));
    }
}
