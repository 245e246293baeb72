use std::ffi::OsString;
use std::path::PathBuf;

use clap::{App, Arg};

use crate::depth::Strategy;
use crate::output::OutputFormat;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub wordnet: PathBuf,
    pub words: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub strategy: Strategy,
    pub root: String,
    pub verbosity: u64,
}

fn app() -> App<'static, 'static> {
    App::new("WordNet Hypernymy Depths")
        .version("0.1")
        .author("John P. McCrae <john@mccr.ae>")
        .about("Computes the WordNet hypernymy depth of the first noun sense of each word in a list")
        .arg(
            Arg::with_name("wordnet")
                .long("wordnet")
                .value_name("dict")
                .help("A WordNet dict directory (index.noun, data.noun, ...) or a WordNet JSON file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("words")
                .long("words")
                .value_name("words1k.txt")
                .help("The word list, one word per line")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("words1k.jwt.hypernymy.depths.txt")
                .help("The file to write the depths to")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .possible_values(&["literal", "json", "tsv"])
                .help("Output format, literal writes {{1, d1}, {2, d2}, ...}")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .possible_values(&["first", "shortest"])
                .help("Follow only the first hypernym, or the shortest path over all hypernyms")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("root")
                .long("root")
                .value_name("entity")
                .help("Lemma of the root concept")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging, repeat for trace"),
        )
}

impl Config {
    pub fn from_args<I, T>(args: I) -> clap::Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = app().get_matches_from_safe(args)?;

        let format = args
            .value_of("format")
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Literal);

        let strategy = match args.value_of("strategy") {
            Some("shortest") => Strategy::ShortestPath,
            _ => Strategy::FirstHypernym,
        };

        Ok(Config {
            wordnet: PathBuf::from(args.value_of("wordnet").unwrap_or("dict")),
            words: PathBuf::from(args.value_of("words").unwrap_or("words1k.txt")),
            output: PathBuf::from(
                args.value_of("output")
                    .unwrap_or("words1k.jwt.hypernymy.depths.txt"),
            ),
            format,
            strategy,
            root: args.value_of("root").unwrap_or("entity").to_string(),
            verbosity: args.occurrences_of("verbose"),
        })
    }
}
