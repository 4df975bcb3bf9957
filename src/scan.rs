//! Reading typed values out of a character stream.
//!
//! Both [`read`] and [`read_many`] take the stream explicitly and only borrow it for the duration
//! of the call. Before reading, a single leftover `'\n'` is discarded so that a read following a
//! token read (which leaves the token's terminating newline in the stream) starts on a fresh
//! line.

use crate::error::ScanError;
use itertools::Itertools;
use log::{debug, trace};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// How a value of some type is extracted from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Float,
    /// Read as the rest of the line, see [`Request::cutoff`].
    Text,
}

/// Types which can be the target of a read.
pub trait Scannable: FromStr {
    const KIND: Kind;
}

macro_rules! scannable {
    ($kind:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Scannable for $t {
                const KIND: Kind = $kind;
            }
        )+
    };
}

scannable!(Kind::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
scannable!(Kind::Float => f32, f64);
scannable!(Kind::Text => String);

/// Parameters of a single read; the default has no prompt, cuts text at the first space and
/// reads lines up to `'\n'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    prompt: &'a str,
    cutoff: char,
    line_delimiter: char,
}

impl Default for Request<'_> {
    fn default() -> Self {
        Request {
            prompt: "",
            cutoff: ' ',
            line_delimiter: '\n',
        }
    }
}

impl<'a> Request<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Request {
            prompt,
            ..Default::default()
        }
    }

    /// Request which keeps the whole line for text reads.
    pub fn line(prompt: &'a str) -> Self {
        Self::new(prompt).cutoff('\n')
    }

    pub fn prompt(self, prompt: &'a str) -> Self {
        Request { prompt, ..self }
    }

    /// Text reads return the line only up to the first `cutoff`. The rest of the line is still
    /// consumed.
    pub fn cutoff(self, cutoff: char) -> Self {
        Request { cutoff, ..self }
    }

    /// Marks the end of the raw line consumed by text and sequence reads.
    pub fn line_delimiter(self, line_delimiter: char) -> Self {
        Request {
            line_delimiter,
            ..self
        }
    }
}

/// Reads a single value.
///
/// Numbers are read as one whitespace delimited token, leaving whatever follows the token in the
/// stream. Text is read as the whole line up to the line delimiter, skipping leading whitespace,
/// and then cut at the first occurrence of the cutoff.
///
/// A token which fails to parse has been consumed and is returned in the error. Use
/// `unwrap_or_default` to fall back to a zero value instead.
pub fn read<T, R, W>(
    input: &mut R,
    prompt_out: &mut W,
    request: &Request<'_>,
) -> Result<T, ScanError<T::Err>>
where
    T: Scannable,
    R: BufRead,
    W: Write,
{
    prompt(prompt_out, request)?;
    skip_stray_newline(input)?;

    match T::KIND {
        Kind::Text => {
            skip_whitespace(input)?;
            let mut raw = Vec::new();
            if read_until_delimiter(input, request.line_delimiter, &mut raw)? == 0 {
                return Err(ScanError::Exhausted);
            }
            let line = decode(&raw);
            trace!("read line {:?}", line);
            let text = match line.find(request.cutoff) {
                Some(end) => &line[..end],
                None => &line[..],
            };
            parse(text)
        }
        Kind::Integer | Kind::Float => {
            let mut raw = Vec::new();
            read_token(input, &mut raw)?;
            if raw.is_empty() {
                return Err(ScanError::Exhausted);
            }
            let token = decode(&raw);
            trace!("read token {:?}", token);
            parse(&token)
        }
    }
}

/// Reads one line and returns the values parsed out of it, stopping at the first token which
/// does not parse. Leading whitespace, including empty lines, is skipped before the line is read.
///
/// Only I/O errors are returned; at the end of the stream the result is empty.
pub fn read_many<T, R, W>(
    input: &mut R,
    prompt_out: &mut W,
    request: &Request<'_>,
) -> io::Result<Vec<T>>
where
    T: Scannable,
    R: BufRead,
    W: Write,
{
    prompt(prompt_out, request)?;
    skip_stray_newline(input)?;
    skip_whitespace(input)?;

    let mut raw = Vec::new();
    read_until_delimiter(input, request.line_delimiter, &mut raw)?;
    let line = decode(&raw);
    trace!("read line {:?}", line);

    Ok(tokenize(&line))
}

/// Parses whitespace separated tokens of `line` until the first one which fails to parse.
pub fn tokenize<T: FromStr>(line: &str) -> Vec<T> {
    let mut tokens = line
        .split(|ch: char| ch.is_ascii() && is_space(ch as u8))
        .filter(|token| !token.is_empty());

    let values = tokens
        .by_ref()
        .map(|token| match token.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!("stopping at unparseable token {:?}", token);
                None
            }
        })
        .while_some()
        .collect::<Vec<_>>();

    let dropped = tokens.count();
    if dropped > 0 {
        debug!("dropped {} tokens after the unparseable one", dropped);
    }

    values
}

fn parse<T: FromStr>(text: &str) -> Result<T, ScanError<T::Err>> {
    text.parse::<T>().map_err(|error| ScanError::Parse {
        token: text.to_owned(),
        error,
    })
}

fn prompt<W: Write>(out: &mut W, request: &Request<'_>) -> io::Result<()> {
    if !request.prompt.is_empty() {
        out.write_all(request.prompt.as_bytes())?;
    }
    out.flush()
}

/// Invalid UTF-8 becomes U+FFFD, which no number parses from.
fn decode(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Whitespace as the C locale sees it.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn peek<R: BufRead>(input: &mut R) -> io::Result<Option<u8>> {
    loop {
        match input.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

fn skip_stray_newline<R: BufRead>(input: &mut R) -> io::Result<()> {
    if peek(input)? == Some(b'\n') {
        input.consume(1);
    }
    Ok(())
}

fn skip_whitespace<R: BufRead>(input: &mut R) -> io::Result<usize> {
    consume_while(input, is_space, None)
}

/// Reads bytes up to the next whitespace or the end of stream; the whitespace stays in the
/// stream.
fn read_token<R: BufRead>(input: &mut R, token: &mut Vec<u8>) -> io::Result<usize> {
    skip_whitespace(input)?;
    consume_while(input, |b| !is_space(b), Some(token))
}

/// Returns the number of bytes consumed. Bytes matching `pred` are appended to `sink` if given.
fn consume_while<R, P>(
    input: &mut R,
    mut pred: P,
    mut sink: Option<&mut Vec<u8>>,
) -> io::Result<usize>
where
    R: BufRead,
    P: FnMut(u8) -> bool,
{
    let mut total = 0;
    loop {
        let (used, done) = {
            let buf = match input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            let used = buf.iter().take_while(|&&b| pred(b)).count();

            if let Some(sink) = sink.as_mut() {
                sink.extend_from_slice(&buf[..used]);
            }

            (used, buf.is_empty() || used < buf.len())
        };

        input.consume(used);
        total += used;

        if done {
            return Ok(total);
        }
    }
}

/// Consumes up to and including `delimiter`, which is not kept in `line`. Returns the number of
/// bytes consumed, zero meaning the stream had already ended.
fn read_until_delimiter<R: BufRead>(
    input: &mut R,
    delimiter: char,
    line: &mut Vec<u8>,
) -> io::Result<usize> {
    let mut encoded = [0u8; 4];
    let delimiter = delimiter.encode_utf8(&mut encoded).as_bytes();
    // multibyte delimiters end in a continuation byte which can also end other characters
    let last = delimiter[delimiter.len() - 1];

    let mut total = 0;
    loop {
        let read = input.read_until(last, line)?;
        total += read;

        if line.ends_with(delimiter) {
            line.truncate(line.len() - delimiter.len());
            return Ok(total);
        }

        if read == 0 {
            return Ok(total);
        }
    }
}
