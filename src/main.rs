use std::io;

use clap::Parser;
use log::trace;
use nscsmiles::client::PugClient;
use nscsmiles::config::Config;
use nscsmiles::fetch::RecordFetcher;

/// Extract one "<smiles> <nscid>" line per standardized compound entry for
/// every substance a PubChem depositor has submitted.
#[derive(Parser)]
struct Cli {
    /// Path to a TOML config overriding the PUG base URL, depositor source,
    /// or property name. Defaults target DTP.NCI IsomericSMILES.
    #[arg(short, long)]
    config: Option<String>,

    /// The depositor source to list substances for. Overrides the config
    /// file value.
    #[arg(short, long)]
    source: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::default(),
    };
    if let Some(source) = cli.source {
        config.source = source;
    }
    trace!("listing substances for {}", config.source);

    let client = PugClient::new().unwrap();
    let fetcher = RecordFetcher::new(&client, &config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = fetcher.run(&mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
