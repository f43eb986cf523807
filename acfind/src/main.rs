use std::fs::File;
use std::io::{prelude::*, stdin, BufReader};
use std::path::PathBuf;

use acpma::alphabet::{Alphabet, Bytes, Lowercase, Symbols, Unicode};
use acpma::{AhoCorasick, AhoCorasickBuilder, Transitions};
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter, Log, Metadata, Record};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArgColor {
    Never,
    Always,
    Auto,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArgAlphabet {
    Lowercase,
    Bytes,
    Unicode,
}

#[derive(Parser, Debug)]
#[command(name = "acfind", about = "A program to report every occurrence of patterns in a text.")]
struct Args {
    /// A match pattern. Can be given several times; may be empty with --allow-empty.
    #[arg(short = 'e', long = "pattern")]
    patterns: Vec<String>,

    /// A filename containing patterns, one per line.
    #[arg(short = 'f', long)]
    pattern_file: Option<PathBuf>,

    /// Symbols patterns and text are made of.
    #[arg(long, value_enum, default_value = "unicode")]
    alphabet: ArgAlphabet,

    /// Accepts empty patterns, which match after every symbol.
    #[arg(long)]
    allow_empty: bool,

    /// Builds the full transition table instead of following failure links.
    #[arg(long)]
    eager: bool,

    /// Highlights the matching patterns.
    #[arg(long, value_enum, default_value = "never")]
    color: ArgColor,

    /// Prints build information to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The text file to search. Reads the standard input if omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    log::set_logger(&LOGGER).map_err(|e| e.to_string())?;
    log::set_max_level(match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    Ok(())
}

/// Reads patterns from the pattern file and the command line, in that order.
///
/// Each line of the pattern file is trimmed and becomes one pattern. A blank line is an
/// empty pattern, which building rejects unless `--allow-empty` is given.
fn read_patterns(args: &Args) -> Result<Vec<String>, std::io::Error> {
    let mut patterns = vec![];
    if let Some(filename) = &args.pattern_file {
        let buf = BufReader::new(File::open(filename)?);
        for line in buf.lines() {
            patterns.push(line?.trim().to_string());
        }
    }
    patterns.extend(args.patterns.iter().cloned());
    Ok(patterns)
}

/// Reads the whole text, dropping surrounding whitespace.
fn read_text(args: &Args) -> Result<String, std::io::Error> {
    let mut text = String::new();
    match &args.file {
        Some(filename) => File::open(filename)?.read_to_string(&mut text)?,
        None => stdin().lock().read_to_string(&mut text)?,
    };
    Ok(text.trim().to_string())
}

/// Prints one line per match in the order the matches are found.
fn write_matches<A, W>(
    pma: &AhoCorasick<A>,
    patterns: &[String],
    text: &str,
    color: ArgColor,
    stream: &mut W,
) -> Result<usize, Box<dyn std::error::Error>>
where
    A: Alphabet,
    str: Symbols<A::Symbol>,
    W: WriteColor,
{
    let mut num_matches = 0;
    for m in pma.find_overlapping_iter(text) {
        let m = m?;
        write!(stream, "Word ")?;
        if !matches!(color, ArgColor::Never) {
            stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        }
        write!(stream, "{}", patterns[m.pattern()])?;
        stream.reset()?;
        writeln!(stream, " appears from {} to {}", m.start(), m.end())?;
        num_matches += 1;
    }
    Ok(num_matches)
}

fn run<A, W>(
    alphabet: A,
    args: &Args,
    patterns: &[String],
    text: &str,
    stream: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    A: Alphabet,
    str: Symbols<A::Symbol>,
    W: WriteColor,
{
    let transitions = if args.eager {
        Transitions::Eager
    } else {
        Transitions::Lazy
    };
    let pma = AhoCorasickBuilder::new(alphabet)
        .allow_empty_pattern(args.allow_empty)
        .transitions(transitions)
        .build(patterns.iter().map(String::as_str))?;
    debug!("{} bytes of heap", pma.heap_bytes());

    let num_matches = write_matches(&pma, patterns, text, args.color, stream)?;
    info!("{num_matches} matches");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.verbose)?;

    // Builds a PMA from given patterns.
    let patterns = read_patterns(&args)?;
    info!("{} patterns", patterns.len());
    let text = read_text(&args)?;

    // Initialize the stream of termcolor.
    let mut stdout = match args.color {
        ArgColor::Never => StandardStream::stdout(ColorChoice::Never),
        ArgColor::Always => StandardStream::stdout(ColorChoice::Always),
        ArgColor::Auto => StandardStream::stdout(ColorChoice::Auto),
    };

    match args.alphabet {
        ArgAlphabet::Lowercase => run(Lowercase, &args, &patterns, &text, &mut stdout),
        ArgAlphabet::Bytes => run(Bytes, &args, &patterns, &text, &mut stdout),
        ArgAlphabet::Unicode => run(Unicode, &args, &patterns, &text, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use acpma::errors::AcpmaError;
    use termcolor::NoColor;

    #[test]
    fn test_args() {
        let args = Args::parse_from(["acfind", "-e", "he", "-e", "", "--allow-empty", "-vv", "text.txt"]);
        assert_eq!(vec!["he".to_string(), String::new()], args.patterns);
        assert!(args.allow_empty);
        assert_eq!(2, args.verbose);
        assert!(matches!(args.alphabet, ArgAlphabet::Unicode));
        assert_eq!(Some(PathBuf::from("text.txt")), args.file);
    }

    #[test]
    fn test_read_patterns_from_args() {
        let args = Args::parse_from(["acfind", "-e", "she", "-e", "he", "--alphabet", "lowercase"]);
        assert_eq!(vec!["she", "he"], read_patterns(&args).unwrap());
    }

    fn write_temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("acfind-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn parse_with_pattern_file(path: &std::path::Path, extra: &[&str]) -> Args {
        let mut argv = vec!["acfind", "-f", path.to_str().unwrap(), "--alphabet", "lowercase"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_read_patterns_from_file() {
        let path = write_temp_file("patterns", "she\n  he \n\nhers\n");
        let args = parse_with_pattern_file(&path, &["-e", "his"]);
        let patterns = read_patterns(&args).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(vec!["she", "he", "", "hers", "his"], patterns);
    }

    #[test]
    fn test_blank_pattern_line() {
        let path = write_temp_file("blank", "ab\n\n");
        let mut stream = NoColor::new(vec![]);

        let args = parse_with_pattern_file(&path, &[]);
        let patterns = read_patterns(&args).unwrap();
        let e = run(Lowercase, &args, &patterns, "ab", &mut stream).unwrap_err();
        assert!(matches!(
            e.downcast_ref::<AcpmaError>(),
            Some(AcpmaError::EmptyPattern(_))
        ));

        let args = parse_with_pattern_file(&path, &["--allow-empty"]);
        let patterns = read_patterns(&args).unwrap();
        std::fs::remove_file(&path).unwrap();
        run(Lowercase, &args, &patterns, "ab", &mut stream).unwrap();
        assert_eq!(
            "Word  appears from 1 to 0\n\
             Word ab appears from 0 to 1\n\
             Word  appears from 2 to 1\n",
            String::from_utf8(stream.into_inner()).unwrap()
        );
    }

    #[test]
    fn test_read_text_trims_whitespace() {
        let path = write_temp_file("text", "  ahishers \n\n");
        let args = Args::parse_from(["acfind", "-e", "he", path.to_str().unwrap()]);
        let text = read_text(&args).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!("ahishers", text);
    }

    #[test]
    fn test_write_matches() {
        let patterns: Vec<String> = ["he", "she", "hers", "his"]
            .iter()
            .map(|p| p.to_string())
            .collect();
        let pma = AhoCorasick::with_alphabet(Lowercase, &patterns).unwrap();
        let mut stream = NoColor::new(vec![]);
        let num_matches =
            write_matches(&pma, &patterns, "ahishers", ArgColor::Always, &mut stream).unwrap();
        assert_eq!(4, num_matches);
        assert_eq!(
            "Word his appears from 1 to 3\n\
             Word he appears from 4 to 5\n\
             Word she appears from 3 to 5\n\
             Word hers appears from 4 to 7\n",
            String::from_utf8(stream.into_inner()).unwrap()
        );
    }

    #[test]
    fn test_write_matches_unsupported_symbol() {
        let patterns = vec!["ab".to_string()];
        let pma = AhoCorasick::with_alphabet(Lowercase, &patterns).unwrap();
        let mut stream = NoColor::new(vec![]);
        assert!(write_matches(&pma, &patterns, "ab Ab", ArgColor::Never, &mut stream).is_err());
        assert_eq!(
            "Word ab appears from 0 to 1\n",
            String::from_utf8(stream.into_inner()).unwrap()
        );
    }

    #[test]
    fn test_init_logger_once() {
        init_logger(1).unwrap();
        assert_eq!(LevelFilter::Info, log::max_level());
        assert!(init_logger(0).is_err());
    }
}
