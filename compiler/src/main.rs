//! Компилятор словаря.
//!
//! Читает словарный пакет (файлы, полученные из словаря OpenCorpora)
//! и собирает из него один скомпилированный файл словаря, который
//! анализатор загружает целиком.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use azmorph::DictionaryBuilder;

use clap::Parser;

/// Аргументы командной строки
#[derive(Parser, Debug)]
#[clap(
    name = "compile",
    about = "A program to compile the dictionary bundle.",
    version
)]
struct Args {
    /// Directory with the dictionary bundle
    /// (grammemes.json, words.csv, paradigms.array, ...).
    #[clap(short = 'i', long)]
    bundle_in: PathBuf,

    /// File to which the compiled dictionary is output.
    #[clap(short = 'o', long)]
    dict_out: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let dir = args.bundle_in;

    eprintln!("Reading the dictionary bundle...");
    let mut builder = DictionaryBuilder::new();
    let config = dir.join("config.json");
    if config.exists() {
        builder = builder.read_config(File::open(config)?)?;
    }
    builder = builder
        .read_grammemes(File::open(dir.join("grammemes.json"))?)?
        .read_gramtab_int(File::open(dir.join("gramtab-opencorpora-int.json"))?)?;
    let gramtab_ext = dir.join("gramtab-opencorpora-ext.json");
    if gramtab_ext.exists() {
        builder = builder.read_gramtab_ext(File::open(gramtab_ext)?)?;
    }
    builder = builder
        .read_suffixes(File::open(dir.join("suffixes.json"))?)?
        .read_paradigms(File::open(dir.join("paradigms.array"))?)?
        .read_words(File::open(dir.join("words.csv"))?)?;
    for i in 0.. {
        let path = dir.join(format!("prediction-suffixes-{i}.csv"));
        if !path.exists() {
            break;
        }
        builder = builder.read_prediction_suffixes(File::open(path)?)?;
    }
    let probabilities = dir.join("p_t_given_w.csv");
    if probabilities.exists() {
        builder = builder.read_probabilities(File::open(probabilities)?)?;
    }

    eprintln!("Compiling the dictionary...");
    let dict = builder.build()?;

    eprintln!("Writing the dictionary...: {}", args.dict_out.display());
    let num_bytes = dict.write(BufWriter::new(File::create(&args.dict_out)?))?;
    eprintln!("{:.3} MiB", num_bytes as f64 / (1024. * 1024.));

    Ok(())
}
