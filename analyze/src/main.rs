//! Утилита морфологического разбора.
//!
//! Читает слова из стандартного ввода (по одному на строку) и выводит
//! варианты разбора с тегами и оценками.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use azmorph::{Analyzer, Config, Dictionary};

use clap::Parser;

/// Аргументы командной строки
#[derive(Parser, Debug)]
#[clap(name = "analyze", about = "Analyzes Russian words morphologically.")]
struct Args {
    /// Compiled dictionary file.
    #[clap(short = 'i', long)]
    dict: PathBuf,

    /// Ignores the letter case of input words.
    #[clap(short = 'c', long)]
    ignore_case: bool,

    /// Always returns at least one parse, even for unknown words.
    #[clap(short = 'f', long)]
    force_parse: bool,

    /// Prints Cyrillic tags when the dictionary provides them.
    #[clap(short = 'e', long)]
    ext_tags: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    eprintln!("Loading the dictionary...");
    let dict = Dictionary::read(BufReader::new(File::open(&args.dict)?))?;
    let analyzer = Analyzer::new(dict);
    let config = Config {
        ignore_case: args.ignore_case,
        force_parse: args.force_parse,
        ..Config::default()
    };

    eprintln!("Ready to analyze");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        for parse in analyzer.analyze(word, &config) {
            let tag = parse.tag();
            write!(&mut out, "{parse}\t")?;
            match tag.ext() {
                Some(ext) if args.ext_tags => write!(&mut out, "{ext}")?,
                _ => write!(&mut out, "{tag}")?,
            }
            writeln!(&mut out, "\t{:.6}", parse.score())?;
        }
        out.write_all(b"EOS\n")?;
        if is_tty {
            out.flush()?;
        }
    }

    Ok(())
}
