//! parastyle - dump the styled runs of an HTML document

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use parastyle::dom::{paragraph_units, parse_html_bytes};
use parastyle::render::{PlainText, compose};
use parastyle::{Error, Paragraph, RenderConfig};

#[derive(Parser)]
#[command(name = "parastyle")]
#[command(version, about = "Show how HTML paragraphs resolve into styled runs", long_about = None)]
#[command(after_help = "EXAMPLES:
    parastyle page.html                 Print paragraphs as plain text
    parastyle page.html --json          Print markers, alignment and runs as JSON
    parastyle page.html -c style.json   Use custom tag styles")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// JSON rendering configuration
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Emit one JSON document per paragraph
    #[arg(long)]
    json: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> parastyle::Result<()> {
    let config = match &cli.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::default(),
    };

    let html = std::fs::read(&cli.input)?;
    let dom = parse_html_bytes(&html);
    let units = paragraph_units(&dom, dom.document(), &config)?;
    log::info!("{}: {} paragraphs", cli.input.display(), units.len());

    if cli.json {
        for unit in &units {
            let rendered = Paragraph::build(&dom, unit, &config)?.render()?;
            let line = serde_json::to_string(&rendered).map_err(Error::Output)?;
            println!("{line}");
        }
        return Ok(());
    }

    let mut text = PlainText::new();
    for unit in &units {
        let paragraph = Paragraph::build(&dom, unit, &config)?;
        compose(&paragraph, &mut text)?;
    }
    print!("{}", text.as_str());
    Ok(())
}
