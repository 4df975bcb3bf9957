use clap::Parser;
use either::Either;
use log::debug;
use simple_io::{file, read, read_many, seq, Request};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Asks for a number, a double, a word, a sentence and lines of values, then prints them back
/// with some transformations applied.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read the answers from this file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Written after every printed value of a sequence.
    #[arg(short, long, default_value_t = ' ')]
    delimiter: char,
}

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    env_logger::Builder::new()
        .parse_env("RUST_LOG")
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    debug!("{:?}", args);

    let stdin = std::io::stdin();
    let mut input = match args.input {
        Some(ref path) => Either::Left(file::read_file(path, || {
            std::process::exit(1);
        })),
        None => Either::Right(stdin.lock()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(&mut input, &mut out, args.delimiter)
}

fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    delimiter: char,
) -> Result<(), Box<dyn std::error::Error + 'static>> {
    let number: i32 = read(input, out, &Request::new("Input a number: "))?;
    writeln!(out, "{}", number)?;

    let double: f64 = read(input, out, &Request::new("Input a double: "))?;
    writeln!(out, "{}", double)?;

    let word: String = read(input, out, &Request::new("Input a word: "))?;
    writeln!(out, "{}", word)?;

    let sentence: String = read(input, out, &Request::line("Input a sentence: "))?;
    writeln!(out, "{}", sentence)?;

    let ints: Vec<i32> = read_many(input, out, &Request::new("Input some integers: "))?;
    seq::print_with(out, &ints, delimiter)?;

    let mut doubles: Vec<f64> = read_many(input, out, &Request::new("Input some doubles: "))?;
    seq::print_with(out, &doubles, delimiter)?;

    let words: Vec<String> = read_many(input, out, &Request::new("Input a sentence: "))?;
    seq::print_with(out, &words, delimiter)?;
    seq::for_each(&words, |w| debug!("{:?} has {} chars", w, w.chars().count()));

    write!(out, "doubled: ")?;
    seq::print_with(out, seq::map(&ints, |x| x * 2), delimiter)?;

    write!(out, "as doubles: ")?;
    seq::print_with(out, seq::map_into(&ints, |&x| f64::from(x) * 2.0), delimiter)?;

    write!(out, "labeled: ")?;
    let labels = seq::map_into(&ints, |x| format!("Value!: {}", x * 2));
    seq::print_with(out, &labels, delimiter)?;

    write!(out, "halved: ")?;
    seq::transform(&mut doubles, |x| x / 2.0);
    seq::print_with(out, &doubles, delimiter)?;

    Ok(())
}

#[test]
fn answers_from_buffer() {
    let mut input = std::io::Cursor::new(
        "5\n10\nhello\nthis is a sentence\n1 2 3 4 5\n1.0 2.0 3.0 4.0 5.0\nthis is a sentence\n",
    );
    let mut out: Vec<u8> = Vec::new();

    run(&mut input, &mut out, ',').unwrap();

    let expected = [
        "Input a number: 5",
        "Input a double: 10",
        "Input a word: hello",
        "Input a sentence: this is a sentence",
        "Input some integers: 1,2,3,4,5,",
        "Input some doubles: 1,2,3,4,5,",
        "Input a sentence: this,is,a,sentence,",
        "doubled: 2,4,6,8,10,",
        "as doubles: 2,4,6,8,10,",
        "labeled: Value!: 2,Value!: 4,Value!: 6,Value!: 8,Value!: 10,",
        "halved: 0.5,1,1.5,2,2.5,",
        "",
    ]
    .join("\n");

    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn parse_failure_is_reported() {
    let mut input = std::io::Cursor::new("five\n");
    let mut out: Vec<u8> = Vec::new();

    let err = run(&mut input, &mut out, ' ').unwrap_err();

    assert_eq!(err.to_string(), "bad input \"five\" (invalid digit found in string)");
}
