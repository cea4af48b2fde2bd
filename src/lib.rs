//! Evaluate a function at evenly spaced points of the unit interval
//! \[0, 1\].
//!
//! The interval is cut into `n` subdivisions of equal width and the
//! function is called at (a subset of) the subdivision points, in
//! increasing order:
//!
//! | Function        | Samples | Parameter values                 |
//! |-----------------|---------|----------------------------------|
//! | [`steps`]       | `n + 1` | 0, 1/n, …, 1                     |
//! | [`leading`]     | `n`     | 0, 1/n, …, (n-1)/n               |
//! | [`trailing`]    | `n`     | 1/n, …, 1                        |
//! | [`in_between`]  | `n - 1` | 1/n, …, (n-1)/n                  |
//! | [`midpoints`]   | `n`     | 1/(2n), 3/(2n), …, (2n-1)/(2n)   |
//!
//! A step count below the minimum of the pattern (`n ≤ 0`, or `n ≤ 1`
//! for [`in_between`]) is not an error: the result is simply empty.
//! The function is called exactly once per parameter value, in
//! increasing order; a panic of the function is propagated.
//!
//! The functions at the root of the crate return a [`Vec`].  The
//! module [`array`] offers the same functions returning a `Box<[T]>`
//! filled in place.
//!
//! # Example
//!
//! ```
//! let ys = unit_steps::steps(4, |t| 10. + 10. * t);
//! assert_eq!(ys, [10., 12.5, 15., 17.5, 20.]);
//! let ys = unit_steps::midpoints(4, |t| 10. + 10. * t);
//! assert_eq!(ys, [11.25, 13.75, 16.25, 18.75]);
//! ```

pub mod array;
mod params;
mod pattern;

pub use params::Params;
pub use pattern::{Pattern, ParsePatternError};

////////////////////////////////////////////////////////////////////////
//
// Step counts

/// Integer types usable as a number of subdivisions of \[0, 1\].
///
/// Zero and negative values are valid and mean "no subdivision".
pub trait StepCount: Copy {
    /// Return the number of subdivisions, `0` for a non-positive
    /// value.
    fn subdivisions(self) -> u64;
}

macro_rules! step_count_signed { ($($t: ty),*) => { $(
    impl StepCount for $t {
        #[inline]
        fn subdivisions(self) -> u64 {
            if self <= 0 { 0 } else { u64::try_from(self).unwrap_or(u64::MAX) }
        }
    }
)* } }

macro_rules! step_count_unsigned { ($($t: ty),*) => { $(
    impl StepCount for $t {
        #[inline]
        fn subdivisions(self) -> u64 {
            u64::try_from(self).unwrap_or(u64::MAX)
        }
    }
)* } }

step_count_signed!(i8, i16, i32, i64, i128, isize);
step_count_unsigned!(u8, u16, u32, u64, u128, usize);

/// Length of a container holding `len` samples.  Lengths that do not
/// fit in memory saturate so that the allocation reports the
/// overflow.
#[inline]
pub(crate) fn container_len(len: u64) -> usize {
    usize::try_from(len).unwrap_or(usize::MAX)
}

////////////////////////////////////////////////////////////////////////
//
// Sequence variant

/// Push `f(t)` for the parameter values of `pattern`, in order.
#[inline]
pub(crate) fn sequence<T, F>(pattern: Pattern, n: u64, mut f: F) -> Vec<T>
where F: FnMut(f64) -> T {
    let len = pattern.count(n);
    let mut v = Vec::with_capacity(container_len(len));
    for i in 0 .. len {
        v.push(f(pattern.t(n, i)));
    }
    v
}

/// Define the function `$fun` returning the samples of `$pattern` as
/// a vector.
macro_rules! sequence_fn {
    ($(#[$doc: meta])* $fun: ident, $pattern: ident) => {
        $(#[$doc])*
        #[inline]
        #[must_use]
        pub fn $fun<T, N, F>(n: N, f: F) -> Vec<T>
        where N: StepCount, F: FnMut(f64) -> T {
            sequence(Pattern::$pattern, n.subdivisions(), f)
        }
    }
}

sequence_fn!(
    /// Return `[f(0), f(1/n), …, f(1)]` (`n + 1` values).  The result
    /// is empty if `n ≤ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// let ys = unit_steps::steps(4, |t| 10. + 10. * t);
    /// assert_eq!(ys, [10., 12.5, 15., 17.5, 20.]);
    /// assert!(unit_steps::steps(0, |t| t).is_empty());
    /// ```
    steps, Steps);

sequence_fn!(
    /// Return `[f(0), f(1/n), …, f((n-1)/n)]` (`n` values), that is
    /// [`steps`] without the final point.  The result is empty if
    /// `n ≤ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// let ys = unit_steps::leading(4, |t| 10. + 10. * t);
    /// assert_eq!(ys, [10., 12.5, 15., 17.5]);
    /// ```
    leading, Leading);

sequence_fn!(
    /// Return `[f(1/n), …, f(1)]` (`n` values), that is [`steps`]
    /// without the first point.  The result is empty if `n ≤ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// let ys = unit_steps::trailing(4, |t| 10. + 10. * t);
    /// assert_eq!(ys, [12.5, 15., 17.5, 20.]);
    /// ```
    trailing, Trailing);

sequence_fn!(
    /// Return `[f(1/n), …, f((n-1)/n)]` (`n - 1` values), the interior
    /// subdivision points.  The result is empty if `n ≤ 1`.
    ///
    /// # Example
    ///
    /// ```
    /// let ys = unit_steps::in_between(4, |t| 10. + 10. * t);
    /// assert_eq!(ys, [12.5, 15., 17.5]);
    /// assert!(unit_steps::in_between(1, |t| t).is_empty());
    /// ```
    in_between, InBetween);

sequence_fn!(
    /// Return `f` evaluated at the middle of each of the `n`
    /// subdivisions: `[f(1/(2n)), f(3/(2n)), …, f((2n-1)/(2n))]`.
    /// The result is empty if `n ≤ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// let ys = unit_steps::midpoints(4, |t| 10. + 10. * t);
    /// assert_eq!(ys, [11.25, 13.75, 16.25, 18.75]);
    /// ```
    midpoints, Midpoints);

////////////////////////////////////////////////////////////////////////
//
// Tests
