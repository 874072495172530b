use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    TreeForWeeks(base::tree::forweeks::Config),
    TreeForTotals(base::tree::fortotals::Config),
    TreeForCats(base::tree::forcats::Config),
    Barchart(base::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NO_SPENDING: &str = "No spending.";
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::TreeForWeeks(config) => {
                if config.report.is_empty() {
                    writeln!(f, "{}", NO_SPENDING)
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::TreeForTotals(config) => {
                if config.report.is_empty() {
                    writeln!(f, "{}", NO_SPENDING)
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::TreeForCats(config) => {
                if config.is_empty() {
                    writeln!(f, "No categories.")
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::Barchart(config) => {
                let chart = config.to_barchart().to_string();
                if chart.is_empty() {
                    writeln!(f, "{}", NO_SPENDING)
                } else {
                    write!(f, "{}", chart)
                }
            }
        }
    }
}
