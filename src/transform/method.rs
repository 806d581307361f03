use super::for_each_auto;
use std::collections::VecDeque;

/// Method-call form: `seq.for_each_in_place(|x| ...)`.
pub trait ForEachInPlace<T> {
    fn for_each_in_place<F>(&mut self, f: F)
    where
        F: Fn(&T) -> T;
}

impl<T> ForEachInPlace<T> for [T] {
    fn for_each_in_place<F>(&mut self, f: F)
    where
        F: Fn(&T) -> T,
    {
        for_each_auto(self, f);
    }
}

impl<T> ForEachInPlace<T> for Vec<T> {
    fn for_each_in_place<F>(&mut self, f: F)
    where
        F: Fn(&T) -> T,
    {
        for_each_auto(self.as_mut_slice(), f);
    }
}

impl<T, const N: usize> ForEachInPlace<T> for [T; N] {
    fn for_each_in_place<F>(&mut self, f: F)
    where
        F: Fn(&T) -> T,
    {
        for_each_auto(self.as_mut_slice(), f);
    }
}

// A ring buffer may wrap, so its storage is two slices: front half first.
impl<T> ForEachInPlace<T> for VecDeque<T> {
    fn for_each_in_place<F>(&mut self, f: F)
    where
        F: Fn(&T) -> T,
    {
        let (front, back) = self.as_mut_slices();
        for_each_auto(front, &f);
        for_each_auto(back, &f);
    }
}
