//! Sampling patterns of the unit interval.

use std::{error::Error,
          fmt::{self, Display, Formatter},
          str::FromStr};
use crate::{StepCount, Params, container_len};

/// Which of the subdivision points of \[0, 1\] are sampled.
///
/// For `n` subdivisions, the parameter values are:
/// - `Steps`: `i / n` for `i = 0, …, n`;
/// - `Leading`: `i / n` for `i = 0, …, n-1`;
/// - `Trailing`: `(i+1) / n` for `i = 0, …, n-1`;
/// - `InBetween`: `(i+1) / n` for `i = 0, …, n-2`;
/// - `Midpoints`: `(2i+1) / (2n)` for `i = 0, …, n-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Steps,
    Leading,
    Trailing,
    InBetween,
    Midpoints,
}

impl Pattern {
    /// All the patterns.
    pub const ALL: [Pattern; 5] = [Pattern::Steps, Pattern::Leading,
                                   Pattern::Trailing, Pattern::InBetween,
                                   Pattern::Midpoints];

    /// Number of samples for `n` subdivisions.
    #[inline]
    pub(crate) fn count(self, n: u64) -> u64 {
        use Pattern::*;
        match self {
            Steps => if n == 0 { 0 } else { n.saturating_add(1) },
            Leading | Trailing | Midpoints => n,
            InBetween => n.saturating_sub(1),
        }
    }

    /// Parameter value of the sample `i`.  Each value is obtained
    /// with a single division so it does not depend on the previous
    /// ones.  Assume `n ≥ 1` and `i < self.count(n)`.
    #[inline]
    pub(crate) fn t(self, n: u64, i: u64) -> f64 {
        use Pattern::*;
        match self {
            Steps | Leading => i as f64 / n as f64,
            Trailing | InBetween => (i + 1) as f64 / n as f64,
            // Multiplying by 2 is exact in floating point.
            Midpoints => (2. * i as f64 + 1.) / (2. * n as f64),
        }
    }

    /// Return the number of samples of the pattern for `n`
    /// subdivisions (`0` if `n` is below the minimum of the pattern).
    /// A count larger than `usize::MAX` (only possible on targets
    /// with pointers narrower than 64 bits) saturates to `usize::MAX`.
    ///
    /// ```
    /// use unit_steps::Pattern;
    /// assert_eq!(Pattern::Steps.len(4), 5);
    /// assert_eq!(Pattern::InBetween.len(1), 0);
    /// assert_eq!(Pattern::Midpoints.len(-3), 0);
    /// ```
    #[inline]
    pub fn len<N: StepCount>(self, n: N) -> usize {
        container_len(self.count(n.subdivisions()))
    }

    /// Return `true` if the pattern has no sample for `n`
    /// subdivisions.
    #[inline]
    pub fn is_empty<N: StepCount>(self, n: N) -> bool {
        self.count(n.subdivisions()) == 0
    }

    /// Return the parameter value of the sample of index `i` for `n`
    /// subdivisions.
    ///
    /// Panics if `i >= self.len(n)`.
    pub fn param<N: StepCount>(self, n: N, i: usize) -> f64 {
        let n = n.subdivisions();
        let i = i as u64;
        if i >= self.count(n) {
            panic!("unit_steps::Pattern::param: index {} out of range \
                    for {} with n = {}", i, self, n);
        }
        self.t(n, i)
    }

    /// Return an iterator on the parameter values of the pattern for
    /// `n` subdivisions.
    ///
    /// Panics if there are more than `usize::MAX` values.
    ///
    /// ```
    /// use unit_steps::Pattern;
    /// let ts: Vec<f64> = Pattern::Trailing.params(4).collect();
    /// assert_eq!(ts, [0.25, 0.5, 0.75, 1.]);
    /// ```
    #[inline]
    pub fn params<N: StepCount>(self, n: N) -> Params {
        Params::new(self, n.subdivisions())
    }

    /// Evaluate `f` at the parameter values of the pattern and return
    /// the results as a vector.  See [`crate::steps`] and siblings.
    #[inline]
    #[must_use]
    pub fn sample<T, N, F>(self, n: N, f: F) -> Vec<T>
    where N: StepCount, F: FnMut(f64) -> T {
        crate::sequence(self, n.subdivisions(), f)
    }

    /// Same as [`Pattern::sample`] but return a boxed slice filled in
    /// place.  See [`crate::array`].
    #[inline]
    #[must_use]
    pub fn sample_array<T, N, F>(self, n: N, f: F) -> Box<[T]>
    where N: StepCount, F: FnMut(f64) -> T {
        crate::array::fill(self, n.subdivisions(), f)
    }

    /// The name of the pattern, as accepted by [`Pattern::from_str`].
    pub fn name(self) -> &'static str {
        use Pattern::*;
        match self {
            Steps => "steps",
            Leading => "leading",
            Trailing => "trailing",
            InBetween => "in-between",
            Midpoints => "midpoints",
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Pattern`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePatternError {
    name: String,
}

impl ParsePatternError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str { &self.name }
}

impl Display for ParsePatternError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sampling pattern {:?} (expected one of \
                   steps, leading, trailing, in-between, midpoints)",
               self.name)
    }
}

impl Error for ParsePatternError {}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    /// Parse the [name](Pattern::name) of a pattern.  `InBetween`
    /// also accepts `in_between` and `inBetween`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Pattern::*;
        match s {
            "steps" => Ok(Steps),
            "leading" => Ok(Leading),
            "trailing" => Ok(Trailing),
            "in-between" | "in_between" | "inBetween" => Ok(InBetween),
            "midpoints" => Ok(Midpoints),
            _ => Err(ParsePatternError { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Pattern;

    #[test]
    fn counts() {
        let expected = [(Pattern::Steps, 6), (Pattern::Leading, 5),
                        (Pattern::Trailing, 5), (Pattern::InBetween, 4),
                        (Pattern::Midpoints, 5)];
        for (p, len) in expected {
            assert_eq!(p.len(5), len, "{p}");
            assert_eq!(p.len(0), 0, "{p}");
            assert!(p.is_empty(-2));
        }
        assert!(Pattern::InBetween.is_empty(1));
        assert!(!Pattern::Steps.is_empty(1));
    }

    #[test]
    fn count_saturates() {
        assert_eq!(Pattern::Steps.count(u64::MAX), u64::MAX);
    }

    #[test]
    fn param_values() {
        assert_eq!(Pattern::Steps.param(8, 8), 1.);
        assert_eq!(Pattern::Leading.param(8, 2), 0.25);
        assert_eq!(Pattern::Trailing.param(8, 1), 0.25);
        assert_eq!(Pattern::InBetween.param(8, 0), 0.125);
        assert_eq!(Pattern::Midpoints.param(8, 0), 0.0625);
        assert_eq!(Pattern::Midpoints.param(8, 7), 0.9375);
    }

    #[test]
    #[should_panic]
    fn param_out_of_range() {
        let _ = Pattern::InBetween.param(4, 3);
    }

    #[test]
    fn names_round_trip() {
        for p in Pattern::ALL {
            assert_eq!(p.to_string().parse::<Pattern>(), Ok(p));
        }
        assert_eq!("inBetween".parse::<Pattern>(), Ok(Pattern::InBetween));
        assert_eq!("in_between".parse::<Pattern>(), Ok(Pattern::InBetween));
    }

    #[test]
    fn unknown_name() {
        let e = "middle".parse::<Pattern>().unwrap_err();
        assert_eq!(e.name(), "middle");
        assert!(e.to_string().contains("\"middle\""));
    }

    #[test]
    fn sample_matches_free_functions() {
        let f = |t: f64| 3. * t - 1.;
        assert_eq!(Pattern::Steps.sample(7, f), crate::steps(7, f));
        assert_eq!(Pattern::Leading.sample(7, f), crate::leading(7, f));
        assert_eq!(Pattern::Trailing.sample(7, f), crate::trailing(7, f));
        assert_eq!(Pattern::InBetween.sample(7, f), crate::in_between(7, f));
        assert_eq!(Pattern::Midpoints.sample(7, f), crate::midpoints(7, f));
        for p in Pattern::ALL {
            assert_eq!(&p.sample_array(7, f)[..], &p.sample(7, f)[..]);
        }
    }
}
