//! The process console as the stream, for when nothing else is needed.
//!
//! Every call locks stdin and stdout for its duration only; values left unread stay buffered in
//! stdin for the next call.
//!
//! ```no_run
//! use simple_io::{console, Request};
//!
//! let age: u8 = console::read(&Request::new("Age: ")).unwrap_or_default();
//! let scores: Vec<f64> = console::read_many(&Request::new("Scores: ")).unwrap();
//! console::print(&scores).unwrap();
//! # let _ = age;
//! ```

use crate::error::ScanError;
use crate::scan::{self, Request, Scannable};
use std::fmt::Display;
use std::io;

pub fn read<T: Scannable>(request: &Request<'_>) -> Result<T, ScanError<T::Err>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    scan::read(&mut stdin.lock(), &mut stdout.lock(), request)
}

pub fn read_many<T: Scannable>(request: &Request<'_>) -> io::Result<Vec<T>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    scan::read_many(&mut stdin.lock(), &mut stdout.lock(), request)
}

pub fn print<I>(iterable: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let stdout = io::stdout();
    crate::seq::print(&mut stdout.lock(), iterable)
}
