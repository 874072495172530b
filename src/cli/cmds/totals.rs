use crate::base;
use crate::cli;

/// View spending totals per series and the weekly average
#[derive(clap::Parser)]
pub struct Totals {
    #[command(flatten)]
    view_opts: cli::sharedopts::ViewOpts,
}

impl Totals {
    pub fn run(&self, book: &base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        let (_, report) = cli::util::run_view(&self.view_opts, book)?;
        Ok(cli::Output::TreeForTotals(base::tree::fortotals::Config {
            charset: base::Charset::from_config(config),
            report,
        }))
    }
}
