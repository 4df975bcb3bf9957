use simple_io::{file, read_many, Request};
use std::cell::Cell;
use std::io::{self, Write};

#[test]
fn file_contents_are_scanned() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "4 8 15\n16 23 42\n").unwrap();

    let mut input = file::read_file(tmp.path(), || panic!("should open"));

    let first: Vec<u32> = read_many(&mut input, &mut io::sink(), &Request::default()).unwrap();
    let second: Vec<u32> = read_many(&mut input, &mut io::sink(), &Request::default()).unwrap();

    assert_eq!(first, vec![4, 8, 15]);
    assert_eq!(second, vec![16, 23, 42]);
}

#[test]
fn missing_file_calls_back() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let called = Cell::new(false);

    let buffer = file::read_file(&missing, || called.set(true));

    assert!(called.get());
    assert!(buffer.get_ref().is_empty());
    assert_eq!(
        file::open_buffer(&missing).unwrap_err().kind(),
        io::ErrorKind::NotFound
    );
}
