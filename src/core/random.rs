use crate::domain::ports::RandomSource;
use crate::utils::error::{Result, UtilsError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EMPTY_ARRAY: &str = "Cannot select a random element: empty array";
const NO_VALUES: &str = "Cannot select a random element: no values provided";

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_int(&mut self, max: usize) -> usize {
        if max <= 1 {
            return 0;
        }
        rand::rng().random_range(0..max)
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_int(&mut self, max: usize) -> usize {
        if max <= 1 {
            return 0;
        }
        self.rng.random_range(0..max)
    }
}

/// Returns a random integer in `[0, max)`.
pub fn random_int(max: usize) -> usize {
    ThreadRandom.random_int(max)
}

/// Returns a random element of `values`.
///
/// ```rust
/// # use small_utils::core::random::pick;
/// let value = pick(&[1, 2, 3]).unwrap();
/// assert!([1, 2, 3].contains(value));
/// assert!(pick::<i32>(&[]).is_err());
/// ```
pub fn pick<T>(values: &[T]) -> Result<&T> {
    pick_with(&mut ThreadRandom, values)
}

pub fn pick_with<'a, T, R>(source: &mut R, values: &'a [T]) -> Result<&'a T>
where
    R: RandomSource + ?Sized,
{
    if values.is_empty() {
        return Err(UtilsError::EmptySelection {
            message: EMPTY_ARRAY.to_string(),
        });
    }
    let index = source.random_int(values.len()) % values.len();
    Ok(&values[index])
}

/// Owned variant backing the [`pick!`](crate::pick) macro.
pub fn pick_owned_with<T, R>(source: &mut R, mut values: Vec<T>) -> Result<T>
where
    R: RandomSource + ?Sized,
{
    if values.is_empty() {
        return Err(no_values());
    }
    let index = source.random_int(values.len()) % values.len();
    Ok(values.swap_remove(index))
}

#[doc(hidden)]
pub fn no_values() -> UtilsError {
    UtilsError::EmptySelection {
        message: NO_VALUES.to_string(),
    }
}

/// Picks one of its arguments at random.
///
/// `pick!(a, b, c)` draws from the thread generator, `pick!(in source; a, b)`
/// from any `RandomSource`. `pick!()` fails with "no values provided".
///
/// ```rust
/// # use small_utils::pick;
/// let value = pick!(1, 2, 3).unwrap();
/// assert!((1..=3).contains(&value));
/// let none: small_utils::Result<i32> = pick!();
/// assert!(none.is_err());
/// ```
#[macro_export]
macro_rules! pick {
    (in $source:expr; $($value:expr),+ $(,)?) => {
        $crate::core::random::pick_owned_with(&mut $source, vec![$($value),+])
    };
    () => {
        ::std::result::Result::Err($crate::core::random::no_values())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::core::random::pick_owned_with(
            &mut $crate::core::random::ThreadRandom,
            vec![$($value),+],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a fixed index, standing in for the generator.
    struct FixedRandom(usize);

    impl RandomSource for FixedRandom {
        fn random_int(&mut self, _max: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_random_int_in_range() {
        for _ in 0..10 {
            let result = random_int(3);
            assert!(result < 3);
        }
        assert_eq!(random_int(1), 0);
        assert_eq!(random_int(0), 0);
    }

    #[test]
    fn test_pick_uses_source_index() {
        for (expected, index) in [(1, 0), (2, 1), (3, 2)] {
            let mut source = FixedRandom(index);
            assert_eq!(*pick_with(&mut source, &[1, 2, 3]).unwrap(), expected);
        }
    }

    #[test]
    fn test_pick_macro_uses_source_index() {
        for (expected, index) in [(1, 0), (2, 1), (3, 2)] {
            let mut source = FixedRandom(index);
            assert_eq!(crate::pick!(in source; 1, 2, 3).unwrap(), expected);
        }
    }

    #[test]
    fn test_out_of_range_source_index_wraps() {
        let mut source = FixedRandom(10);
        assert_eq!(*pick_with(&mut source, &[1, 2, 3]).unwrap(), 2);
        assert_eq!(crate::pick!(in source; 1, 2, 3).unwrap(), 2);
    }

    #[test]
    fn test_pick_empty_array() {
        let err = pick::<u8>(&[]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot select a random element: empty array");
    }

    #[test]
    fn test_pick_no_values() {
        let result: Result<u8> = crate::pick!();
        assert_eq!(
            result.unwrap_err().to_string(),
            "Cannot select a random element: no values provided"
        );
    }

    #[test]
    fn test_pick_single_value() {
        assert_eq!(*pick(&[42]).unwrap(), 42);
        assert_eq!(crate::pick!(42).unwrap(), 42);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let values = ["a", "b", "c", "d", "e"];
        let mut first = SeededRandom::new(7);
        let mut second = SeededRandom::new(7);
        for _ in 0..20 {
            assert_eq!(
                pick_with(&mut first, &values).unwrap(),
                pick_with(&mut second, &values).unwrap()
            );
        }
    }
}
