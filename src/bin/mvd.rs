use std::env::current_dir;
use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::{error, info};

use mvd::{Config, Format, MultiValueDictionary, Result, Session};

#[derive(Parser)]
#[command(name = "mvd", version, about = "An in-memory multi-value dictionary shell")]
struct Cli {
    /// Config file (defaults to mvd.json in the working directory, if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Prompt written before each command
    #[arg(long)]
    prompt: Option<String>,

    /// Do not print the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Clear without asking for confirmation
    #[arg(long, short = 'y')]
    yes: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    let env = env_logger::Env::default().filter_or("MVD_LOG", &config.log_level);
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(config) {
        error!("{}", e);
        exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref(), &current_dir()?)?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    if cli.no_banner {
        config.banner = false;
    }
    if cli.yes {
        config.confirm_clear = false;
    }
    Ok(config)
}

fn run(config: Config) -> Result<()> {
    info!("mvd {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        MultiValueDictionary::new(),
        stdin.lock(),
        stdout.lock(),
        config,
    );
    session.run()?;

    info!("Shutting down");
    Ok(())
}
