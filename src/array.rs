//! Samplings returned as boxed slices.
//!
//! The functions of this module have the same semantics as the ones
//! at the root of the crate but the result is allocated once, at its
//! final length, and each slot is written directly with the value of
//! the function, without growing a vector first.
//!
//! ```
//! use unit_steps::array;
//! let ys: Box<[f64]> = array::steps(4, |t| 10. + 10. * t);
//! assert_eq!(*ys, unit_steps::steps(4, |t| 10. + 10. * t)[..]);
//! ```

use std::mem::{self, MaybeUninit};
use crate::{Pattern, StepCount, container_len};

/// Slots of which the first `init` are initialized.  Dropping it
/// drops those values, so a panic of the function releases the
/// results computed so far.
struct Filled<'a, T> {
    slots: &'a mut [MaybeUninit<T>],
    init: usize,
}

impl<T> Drop for Filled<'_, T> {
    fn drop(&mut self) {
        for slot in &mut self.slots[.. self.init] {
            // SAFETY: the first `init` slots are initialized.
            unsafe { slot.assume_init_drop() }
        }
    }
}

/// Write `f(t)`, for the parameter values `t` of `pattern`, into a
/// boxed slice allocated at its final length.
///
/// If `f` panics, the values already computed are dropped.
#[inline]
pub(crate) fn fill<T, F>(pattern: Pattern, n: u64, mut f: F) -> Box<[T]>
where F: FnMut(f64) -> T {
    let len = container_len(pattern.count(n));
    let mut slots = Box::<[T]>::new_uninit_slice(len);
    let mut filled = Filled { slots: &mut slots[..], init: 0 };
    while filled.init < len {
        let i = filled.init;
        filled.slots[i].write(f(pattern.t(n, i as u64)));
        filled.init += 1;
    }
    mem::forget(filled);
    // SAFETY: the loop above initialized all the slots.
    unsafe { slots.assume_init() }
}

/// Define the function `$fun` returning the samples of `$pattern` as
/// a boxed slice.
macro_rules! array_fn {
    ($(#[$doc: meta])* $fun: ident, $pattern: ident) => {
        #[doc = concat!("Same as [`crate::", stringify!($fun),
                        "`] but return a boxed slice.")]
        $(#[$doc])*
        #[inline]
        #[must_use]
        pub fn $fun<T, N, F>(n: N, f: F) -> Box<[T]>
        where N: StepCount, F: FnMut(f64) -> T {
            fill(Pattern::$pattern, n.subdivisions(), f)
        }
    }
}

array_fn!(
    ///
    /// ```
    /// let ys = unit_steps::array::steps(2, |t| t);
    /// assert_eq!(*ys, [0., 0.5, 1.]);
    /// ```
    steps, Steps);
array_fn!(leading, Leading);
array_fn!(trailing, Trailing);
array_fn!(
    ///
    /// ```
    /// let ys = unit_steps::array::in_between(1, |t| t);
    /// assert!(ys.is_empty());
    /// ```
    in_between, InBetween);
array_fn!(midpoints, Midpoints);
