use tracing::level_filters::LevelFilter;

use crate::base;
use crate::cli;

/// Weekly spending by category
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Logging verbosity: off, error, warn, info, debug, or trace
    ///
    /// Logs are written to stderr. The RUST_LOG environment variable takes
    /// precedence when set.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Cats(cli::cmds::cats::Cats),
    Weekly(cli::cmds::weekly::Weekly),
    Totals(cli::cmds::totals::Totals),
    Plot(cli::cmds::plot::Plot),
}

impl Root {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = cli::util::read::<base::Config>(fs)?;
        let book = cli::util::read_book(fs)?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Cats(cmd) => cmd.run(book, &config),
            Commands::Weekly(cmd) => cmd.run(&book, &config),
            Commands::Totals(cmd) => cmd.run(&book, &config),
            Commands::Plot(cmd) => cmd.run(&book, &config),
        }
    }
}
