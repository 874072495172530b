use anyhow::Context;

use crate::base;
use crate::cli;

/// View spending week by week
#[derive(clap::Parser)]
pub struct Weekly {
    #[command(flatten)]
    view_opts: cli::sharedopts::ViewOpts,

    /// Output format [possible values: tree, json]
    ///
    /// 'json' writes an array of '{"week_start", "amount", "label"}' objects
    /// with amounts in major units, for consumption by charting tools.
    #[arg(short, long, default_value_t = Format::Tree)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Format {
    Tree,
    Json,
}

impl Weekly {
    pub fn run(&self, book: &base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        let (_, report) = cli::util::run_view(&self.view_opts, book)?;
        match self.format {
            Format::Tree => Ok(cli::Output::TreeForWeeks(base::tree::forweeks::Config {
                charset: base::Charset::from_config(config),
                report,
            })),
            Format::Json => {
                let s = serde_json::to_string_pretty(report.rows())
                    .context("failed to serialize weekly spending")?;
                Ok(cli::Output::Str(s))
            }
        }
    }
}
