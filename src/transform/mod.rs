//! In-place element-wise transforms over mutable sequences.
//!
//! Every function here visits each position exactly once, front to back, and
//! writes `f(&old)` back into that position. Taking `&mut [T]` means the
//! sequence can be any `Vec`, array or slice, and its length cannot change.

mod fixed;
mod method;

pub use fixed::for_each_fixed;
pub use method::ForEachInPlace;

/// Element type and callable type are both explicit generic parameters.
///
/// The callable may return anything convertible into `T`, so an `i64`
/// sequence accepts a closure producing `i32`, and a `String` sequence
/// accepts one producing `&'static str`.
pub fn for_each<T, U, F>(container: &mut [T], f: F)
where
    F: Fn(&T) -> U,
    U: Into<T>,
{
    for el in container.iter_mut() {
        *el = f(el).into();
    }
}

/// Same contract as [`for_each`], with the callable bound written inline as
/// `impl Fn` and left for the compiler to infer at the call site.
pub fn for_each_auto<T>(container: &mut [T], f: impl Fn(&T) -> T) {
    for el in container.iter_mut() {
        *el = f(el);
    }
}
