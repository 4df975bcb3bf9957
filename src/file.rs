use log::debug;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;

/// Copies the whole file into memory, ready to be read like stdin.
pub fn open_buffer<P: AsRef<Path>>(path: P) -> io::Result<Cursor<Vec<u8>>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    debug!("loaded {} bytes from {}", contents.len(), path.display());
    Ok(Cursor::new(contents))
}

/// Like [`open_buffer`] but reports failure on stderr and calls `on_error`, returning an empty
/// buffer if `on_error` returns.
pub fn read_file<P, F>(path: P, on_error: F) -> Cursor<Vec<u8>>
where
    P: AsRef<Path>,
    F: FnOnce(),
{
    let path = path.as_ref();
    match open_buffer(path) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Failed to open file {}: {}", path.display(), e);
            on_error();
            Cursor::new(Vec::new())
        }
    }
}
