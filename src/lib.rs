//! Reading numbers, words and lines of values from stdin-like streams, and a few shorthands for
//! working with the `Vec`s read.
//!
//! ```
//! use simple_io::{read, read_many, Request};
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new("5\n1 2 3\n");
//! let mut prompts: Vec<u8> = Vec::new();
//!
//! let n: i32 = read(&mut input, &mut prompts, &Request::new("count: ")).unwrap();
//! let values: Vec<u32> = read_many(&mut input, &mut prompts, &Request::default()).unwrap();
//!
//! assert_eq!(n, 5);
//! assert_eq!(values, [1, 2, 3]);
//! assert_eq!(prompts, b"count: ");
//! ```

pub mod console;
mod error;
pub mod file;
pub mod scan;
pub mod seq;

pub use error::ScanError;
pub use scan::{read, read_many, Kind, Request, Scannable};
