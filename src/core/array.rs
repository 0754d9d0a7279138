/// Creates the indices `[0, 1, …, n - 1]`.
///
/// Handy for repeating an operation `n` times:
///
/// ```rust
/// # use small_utils::core::array::times;
/// assert_eq!(times(3), vec![0, 1, 2]);
/// let greetings: Vec<String> = times(2).into_iter().map(|i| format!("hello {}", i)).collect();
/// assert_eq!(greetings.len(), 2);
/// ```
pub fn times(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Like [`times`], for a length that arrives as a dynamic number.
///
/// Fractions are truncated; negative, NaN and infinite lengths yield an
/// empty vector.
pub fn times_lossy(n: f64) -> Vec<usize> {
    if !n.is_finite() || n <= 0.0 {
        return Vec::new();
    }
    times(n.trunc() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_creates_indices() {
        for n in [1, 3, 10] {
            let value = times(n);
            assert_eq!(value.len(), n);
            assert_eq!(value.first(), Some(&0));
            assert_eq!(value.last(), Some(&(n - 1)));
        }
    }

    #[test]
    fn test_times_zero_is_empty() {
        assert!(times(0).is_empty());
    }

    #[test]
    fn test_times_lossy_negative() {
        assert!(times_lossy(-1.0).is_empty());
        assert!(times_lossy(-5.0).is_empty());
        assert!(times_lossy(f64::NAN).is_empty());
        assert!(times_lossy(f64::INFINITY).is_empty());
    }

    #[test]
    fn test_times_lossy_truncates() {
        assert_eq!(times_lossy(3.7), vec![0, 1, 2]);
        assert_eq!(times_lossy(2.1), vec![0, 1]);
    }
}
