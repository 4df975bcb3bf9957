use std::fmt;

/// Failure of a single value read. `E` is the parse error of the target type.
#[derive(Debug)]
pub enum ScanError<E> {
    Io(std::io::Error),
    /// The stream ended before anything could be read.
    Exhausted,
    /// Token was consumed from the stream but did not parse.
    Parse { token: String, error: E },
}

impl<E> ScanError<E> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, ScanError::Exhausted)
    }

    /// The consumed token which failed to parse, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            ScanError::Parse { token, .. } => Some(token.as_str()),
            _ => None,
        }
    }
}

impl<E> From<std::io::Error> for ScanError<E> {
    fn from(e: std::io::Error) -> Self {
        ScanError::Io(e)
    }
}

impl<E: fmt::Display> fmt::Display for ScanError<E> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(fmt, "failed to read input: {}", e),
            ScanError::Exhausted => write!(fmt, "input ended before a value was read"),
            ScanError::Parse { token, error } => write!(fmt, "bad input \"{}\" ({})", token, error),
        }
    }
}

impl<E> std::error::Error for ScanError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            ScanError::Exhausted => None,
            ScanError::Parse { error, .. } => Some(error),
        }
    }
}
