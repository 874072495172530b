use crate::base;
use crate::cli;

/// Plot total spending per week
#[derive(clap::Parser)]
pub struct Plot {
    #[command(flatten)]
    view_opts: cli::sharedopts::ViewOpts,
}

impl Plot {
    pub fn run(&self, book: &base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        let (request, report) = cli::util::run_view(&self.view_opts, book)?;
        let chart_config = base::barchart::Config {
            charset: base::Charset::from_config(config),
            bounds: request.interval,
            term_width: term_width(),
            show_empty_weeks: config.show_empty_weeks,
            report,
        };
        Ok(cli::Output::Barchart(chart_config))
    }
}

/// Returns the terminal's width, or 0 if stdout is not a terminal.
#[cfg(not(test))]
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Charts in tests are drawn at the minimum width.
#[cfg(test)]
fn term_width() -> usize {
    0
}
