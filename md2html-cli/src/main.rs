// Command-line interface for md2html
//
// Converts one markdown file into one HTML file:
//
//  md2html <input> <output> [--config <file>] [-v...] [--log-format human|json]
//
// The conversion itself lives in the md2html crate; this binary only parses
// arguments, loads configuration, sets up logging and maps failures to exit
// codes. Every failure (usage, missing input, unreadable input, unwritable
// output, bad configuration) exits with status 1; success exits with 0.
//
// Configuration is layered: built-in defaults, then ./md2html.toml if present,
// then the file given with --config. Flags win over configuration, and the
// MD2HTML_LOG environment variable wins over both for the log filter.

mod logging;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use logging::LogFormat;
use md2html::{publish, ConvertError, FileSink, FileSource, RenderOptions};
use md2html_config::{Loader, Md2HtmlConfig};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

const USAGE: &str = "Usage: md2html README.md README.html";

fn build_cli() -> Command {
    Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a markdown file to HTML")
        .long_about(
            "md2html converts a small markdown subset into HTML.\n\n\
            Supported syntax:\n  \
            - headings (#, ##, ...), unordered (-) and ordered (* ) list items\n  \
            - paragraphs, with <br/> between consecutive lines\n  \
            - **bold** and __emphasis__\n  \
            - [[text]] becomes the MD5 digest of text\n  \
            - ((text)) drops every c and C from text\n\n\
            Examples:\n  \
            md2html README.md README.html\n  \
            md2html notes.md notes.html --config md2html.toml -vv",
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to read")
                .required(true)
                .index(1)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("HTML file to write (overwritten if it exists)")
                .required(true)
                .index(2)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2html.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("Log output format on stderr")
                .value_parser(clap::builder::PossibleValuesParser::new(["human", "json"])),
        )
}

/// Parse arguments, exiting with status 1 on any usage error.
fn parse_args<I, T>(args: I) -> ArgMatches
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_cli().try_get_matches_from(args).unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        ErrorKind::MissingRequiredArgument => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    })
}

fn main() {
    let matches = parse_args(std::env::args_os());

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    let format = log_format(&matches, &config);
    let verbosity = matches.get_count("verbose");
    logging::init_logging(
        format,
        logging::verbosity_to_directive(verbosity, &config.log.level),
    );

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input is required");
    let output = matches
        .get_one::<PathBuf>("output")
        .expect("output is required");

    handle_convert_command(input, output, &config);
}

/// Handle the conversion of `input` into `output`
fn handle_convert_command(input: &Path, output: &Path, config: &Md2HtmlConfig) {
    let source = FileSource::open(input).unwrap_or_else(|e| fail(e));

    let options = RenderOptions::from(&config.output);
    debug!(input = %input.display(), output = %output.display(), ?options, "converting");

    publish(source, FileSink::new(output), &options).unwrap_or_else(|e| fail(e));
}

fn fail(err: ConvertError) -> ! {
    debug!(path = %err.path().display(), "conversion failed");
    eprintln!("{err}");
    std::process::exit(1);
}

fn load_cli_config(explicit_path: Option<&str>) -> Md2HtmlConfig {
    let loader = Loader::new().with_project_file(".");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn log_format(matches: &ArgMatches, config: &Md2HtmlConfig) -> LogFormat {
    matches
        .get_one::<String>("log-format")
        .and_then(|flag| LogFormat::from_flag(flag))
        .unwrap_or_else(|| config.log.format.into())
}
