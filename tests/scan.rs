use simple_io::{read, read_many, Request};
use std::io::{self, Cursor};

const ANSWERS: &str =
    "5\n10\nhello\nthis is a sentence\n1 2 3 4 5\n1.0 2.0 3.0 4.0 5.0\nthis is a sentence\n";

#[test]
fn answers_in_order() {
    let mut input = Cursor::new(ANSWERS);
    let mut prompts: Vec<u8> = Vec::new();

    let num: i32 = read(&mut input, &mut prompts, &Request::new("Input a number: ")).unwrap();
    assert_eq!(num, 5);

    let num: f64 = read(&mut input, &mut prompts, &Request::new("Input a double: ")).unwrap();
    assert_eq!(num, 10.0);

    let word: String = read(&mut input, &mut prompts, &Request::new("Input a word: ")).unwrap();
    assert_eq!(word, "hello");

    let request = Request::new("Input a sentence: ").cutoff('\n');
    let sentence: String = read(&mut input, &mut prompts, &request).unwrap();
    assert_eq!(sentence, "this is a sentence");

    let ints: Vec<i32> = read_many(&mut input, &mut prompts, &Request::default()).unwrap();
    assert_eq!(ints, vec![1, 2, 3, 4, 5]);

    let doubles: Vec<f64> = read_many(&mut input, &mut prompts, &Request::default()).unwrap();
    assert_eq!(doubles, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let words: Vec<String> = read_many(&mut input, &mut prompts, &Request::default()).unwrap();
    assert_eq!(words, vec!["this", "is", "a", "sentence"]);

    assert_eq!(
        String::from_utf8(prompts).unwrap(),
        "Input a number: Input a double: Input a word: Input a sentence: "
    );

    // everything has been consumed
    let rest: Vec<u8> = read_many(&mut input, &mut io::sink(), &Request::default()).unwrap();
    assert!(rest.is_empty());
}

#[test]
fn empty_line_gives_empty_sequence() {
    let request = Request::default().line_delimiter(';');

    let mut input = Cursor::new(";1 2;");
    let first: Vec<i32> = read_many(&mut input, &mut io::sink(), &request).unwrap();
    assert!(first.is_empty());

    let second: Vec<i32> = read_many(&mut input, &mut io::sink(), &request).unwrap();
    assert_eq!(second, vec![1, 2]);

    let mut input = Cursor::new("");
    let none: Vec<String> = read_many(&mut input, &mut io::sink(), &Request::default()).unwrap();
    assert!(none.is_empty());
}

#[test]
fn sequence_stops_at_bad_token() {
    let mut input = Cursor::new("1 2 x 4\n5\n");
    let values: Vec<i32> = read_many(&mut input, &mut io::sink(), &Request::default()).unwrap();
    assert_eq!(values, vec![1, 2]);

    // the rest of the line is gone but the next line is intact
    let next: i32 = read(&mut input, &mut io::sink(), &Request::default()).unwrap();
    assert_eq!(next, 5);
}

#[test]
fn sequence_does_not_read_past_its_line() {
    let mut input = Cursor::new("3\n1 2 3\n4 5 6\n");

    let count: usize = read(&mut input, &mut io::sink(), &Request::default()).unwrap();
    let first: Vec<u8> = read_many(&mut input, &mut io::sink(), &Request::default()).unwrap();
    let second: Vec<u8> = read_many(&mut input, &mut io::sink(), &Request::default()).unwrap();

    assert_eq!(count, first.len());
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(second, vec![4, 5, 6]);
}

#[test]
fn text_with_custom_delimiters() {
    let mut input = Cursor::new("  key=value;other");
    let request = Request::default().cutoff('=').line_delimiter(';');

    let key: String = read(&mut input, &mut io::sink(), &request).unwrap();
    assert_eq!(key, "key");

    let rest: String = read(&mut input, &mut io::sink(), &Request::line("")).unwrap();
    assert_eq!(rest, "other");
}
