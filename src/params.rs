//! Lazy iterator on the parameter values of a pattern.

use std::iter::FusedIterator;
use crate::{Pattern, container_len};

/// Iterator on the parameter values of a [`Pattern`], in increasing
/// order.  See [`Pattern::params`].
#[derive(Debug, Clone)]
pub struct Params {
    pattern: Pattern,
    n: u64,
    front: u64, // Next index from the front.
    back: u64,  // One past the next index from the back.
}

impl Params {
    /// Panics if the number of values does not fit in a `usize`, so
    /// that [`ExactSizeIterator::len`] is always exact.
    #[inline]
    pub(crate) fn new(pattern: Pattern, n: u64) -> Self {
        let back = pattern.count(n);
        if usize::try_from(back).is_err() {
            panic!("unit_steps::Pattern::params: {} values for {} with \
                    n = {} exceed usize::MAX", back, pattern, n);
        }
        Params { pattern, n, front: 0, back }
    }

    /// The pattern being iterated.
    pub fn pattern(&self) -> Pattern { self.pattern }

    /// The number of subdivisions of \[0, 1\] (`0` if the step count
    /// was not positive).
    pub fn step_count(&self) -> u64 { self.n }
}

impl Iterator for Params {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back { return None }
        let t = self.pattern.t(self.n, self.front);
        self.front += 1;
        Some(t)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Fits: `back` was checked by `Params::new`.
        let len = container_len(self.back - self.front);
        (len, Some(len))
    }

    fn nth(&mut self, k: usize) -> Option<f64> {
        self.front = self.front.saturating_add(k as u64).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Params {
    #[inline]
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back { return None }
        self.back -= 1;
        Some(self.pattern.t(self.n, self.back))
    }
}

impl ExactSizeIterator for Params {}

impl FusedIterator for Params {}

#[cfg(test)]
mod tests {
    use crate::Pattern;

    #[test]
    fn matches_sampling() {
        for p in Pattern::ALL {
            for n in -1 ..= 12 {
                let ts: Vec<f64> = p.params(n).collect();
                assert_eq!(ts, p.sample(n, |t| t), "{p} n = {n}");
                assert_eq!(p.params(n).len(), p.len(n));
            }
        }
    }

    #[test]
    fn both_ends() {
        let mut it = Pattern::Steps.params(4);
        assert_eq!(it.next_back(), Some(1.));
        assert_eq!(it.next(), Some(0.));
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(0.75));
        assert_eq!(it.next(), Some(0.25));
        assert_eq!(it.next(), Some(0.5));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn reversed() {
        let ts: Vec<f64> = Pattern::Midpoints.params(4).rev().collect();
        assert_eq!(ts, [0.875, 0.625, 0.375, 0.125]);
    }

    #[test]
    fn nth() {
        let mut it = Pattern::Leading.params(10);
        assert_eq!(it.nth(3), Some(0.3));
        assert_eq!(it.len(), 6);
        assert_eq!(it.nth(100), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_count_is_exact() {
        let it = Pattern::Leading.params(u64::MAX);
        assert_eq!(it.len(), usize::MAX);
        assert_eq!(it.size_hint(), (usize::MAX, Some(usize::MAX)));
    }

    #[test]
    #[cfg(not(target_pointer_width = "64"))]
    #[should_panic]
    fn count_beyond_usize_panics() {
        let _ = Pattern::Leading.params(u64::MAX);
    }

    #[test]
    fn accessors() {
        let it = Pattern::InBetween.params(-4i8);
        assert_eq!(it.pattern(), Pattern::InBetween);
        assert_eq!(it.step_count(), 0);
        assert_eq!(it.len(), 0);
    }
}
