//! nameGenerator
//!
//! Prints one random given name, e.g. `Anna (female)`.
//! Usage: `nameGenerator [male|female]`

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::iter;
use std::process;

use clap::Parser;
use generator::config::DEFAULT_LOG_FILTER;
use generator::{category_from_args, Category, Config, Error, NamePicker, USAGE};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Positional values are collected raw and validated by the generator,
/// so flags like `--help` count as ordinary (invalid) arguments.
#[derive(Parser, Debug)]
#[command(
    name = "nameGenerator",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Parse a full command line, program name first. Every user token,
    /// `--` included, ends up in `args`.
    fn parse_raw<I>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut raw = raw.into_iter();
        let program = raw.next().unwrap_or_else(|| OsString::from("nameGenerator"));

        // Our own end-of-options marker, so clap never swallows the user's `--`
        let escaped = iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(raw);
        Self::try_parse_from(escaped)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::parse_raw(env::args_os()) {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let (category, config) = match resolve(&cli.args, Config::from_env) {
        Ok(resolved) => resolved,
        Err(err) => fail(&err),
    };

    init_logging(&config)?;
    debug!(args = ?cli.args, seed = ?config.seed, "nameGenerator starting");

    let selection = NamePicker::from_config(&config).pick(category);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", selection)?;

    Ok(())
}

/// Arguments are checked before the environment, so a rejected command line
/// always exits 1 or 2 whatever the configuration holds.
fn resolve<F>(args: &[OsString], load_config: F) -> Result<(Option<Category>, Config), Error>
where
    F: FnOnce() -> Result<Config, Error>,
{
    let category = category_from_args(args)?;
    let config = load_config()?;
    Ok((category, config))
}

fn fail(err: &Error) -> ! {
    debug!(%err, code = err.exit_code(), "invocation rejected");
    eprintln!("{}", err.user_message());
    process::exit(err.exit_code());
}

/// Logs go to stderr; stdout carries only the picked name.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
