/// Source of uniformly distributed integers.
///
/// Kept behind a trait so selection logic can be driven deterministically in
/// tests and from a configured seed.
pub trait RandomSource {
    /// Returns an integer in `[0, max)`. `max <= 1` always yields `0`.
    fn random_int(&mut self, max: usize) -> usize;
}
