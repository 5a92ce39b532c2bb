use clap::Parser;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xmljson::{
    error::Error,
    parse_file,
    utils::write_encoded,
    Culture, EncodeOptions, OutputFormat, TextEncoding, XmlJsonEncoder,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON file path
    #[arg(short, long)]
    file: String,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Indent nested elements
    #[arg(short, long)]
    pretty: bool,

    /// Output text encoding (utf-8, utf-16le, utf-16be)
    #[arg(short, long, default_value = "utf-8")]
    encoding: TextEncoding,

    /// Decimal separator used when writing numbers
    #[arg(long, default_value_t = '.')]
    decimal_separator: char,

    /// Writer used for the output
    #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
    format: OutputFormat,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .with_writer(io::stderr)
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = Args::parse();

    let culture = if args.decimal_separator == '.' {
        Culture::invariant()
    } else {
        Culture::new("custom", args.decimal_separator)
    };
    let options = EncodeOptions::new()
        .with_encoding(args.encoding)
        .pretty(args.pretty)
        .with_culture(culture)
        .with_format(args.format);

    info!("Reading file: {}", args.file);
    let element = parse_file(&args.file)?;

    // Write to file or print to stdout
    if let Some(output_path) = args.output {
        write_encoded(&output_path, &element, &options)?;
        info!("Wrote {}", output_path);
    } else {
        let mut stdout = io::stdout().lock();
        XmlJsonEncoder::new().encode(&element, &mut stdout, &options)?;
        writeln!(stdout).map_err(xmljson::EncodeError::from)?;
    }

    Ok(())
}
