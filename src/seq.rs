//! Shorthands for the usual things done to a `Vec` of freshly read values.

use std::fmt::Display;
use std::io::{self, Write};

/// Calls `action` for every element in order.
pub fn for_each<I, F>(iterable: I, action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    iterable.into_iter().for_each(action)
}

/// Replaces every element with `f(element)`, front to back.
pub fn transform<T, F>(values: &mut [T], mut f: F)
where
    F: FnMut(&T) -> T,
{
    for value in values.iter_mut() {
        *value = f(&*value);
    }
}

/// Like [`transform`] but on a copy, leaving `values` as they were.
pub fn map<T, F>(values: &[T], f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    let mut copy = values.to_vec();
    transform(&mut copy, f);
    copy
}

/// Maps into a new `Vec` of possibly different element type.
pub fn map_into<I, K, F>(iterable: I, f: F) -> Vec<K>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> K,
{
    iterable.into_iter().map(f).collect()
}

/// Writes every element followed by a space, then a newline.
pub fn print<W, I>(out: &mut W, iterable: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    print_with(out, iterable, ' ')
}

pub fn print_with<W, I, D>(out: &mut W, iterable: I, delimiter: D) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
    D: Display,
{
    for value in iterable {
        write!(out, "{}{}", value, delimiter)?;
    }
    writeln!(out)
}
