use clap::{ArgAction, Parser as ClapParser, Subcommand};
use county_query::cli::{self, CliError, RunOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "county-query")]
#[command(about = "Aggregate and filter county demographics with line-oriented query scripts")]
#[command(version)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a query script
    Run {
        /// Script file, or '-' to read the script from stdin
        script: Option<PathBuf>,

        /// County demographics JSON file
        #[arg(
            short,
            long,
            env = "COUNTY_QUERY_DATA",
            default_value = "data/county_demographics.json"
        )]
        data: PathBuf,
    },

    /// Show the command language reference
    Grammar,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run { script, data } => run(script, data),
        Commands::Grammar => {
            print!("{}", cli::get_grammar_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(script: Option<PathBuf>, data: PathBuf) -> Result<(), CliError> {
    let script = script.filter(|p| p.as_os_str() != "-");
    if script.is_none() && atty::is(atty::Stream::Stdin) {
        return Err(CliError::NoScript);
    }

    let options = RunOptions { script, data };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::execute_run(&options, io::stdin().lock(), &mut out)?;
    out.flush()?;
    Ok(())
}
