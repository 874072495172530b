use crate::base;

pub const INTERVAL_HELP: &str = "Interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below). 'A' and 'B' are both optional, defaulting to 0000-01-01 and 9999-12-31 respectively.

A relative date is one of the following ('n' is optional and defaults to 0):
dn: n days from today
wn: Monday of the nth week from today
Wn: Sunday of the nth week from today

The following shorthands are also available:
dn = dn:dn
wn = wn:Wn
Wn = wn:Wn";

/// Options selecting which spending to aggregate.
#[derive(clap::Args)]
pub struct ViewOpts {
    /// Category of interest, by id or by name
    ///
    /// Names are matched ignoring case. Spending in the category's
    /// descendants is included. Without a category, every root category is
    /// shown next to unassigned spending.
    pub target: Option<String>,

    /// Show one series per direct child of the category
    ///
    /// Spending assigned to the category itself is shown as
    /// '<category> (Direct)'.
    #[arg(short, long)]
    pub breakdown: bool,

    /// Show only transactions without a category
    #[arg(short, long)]
    pub unassigned: bool,

    #[arg(
        short,
        long,
        default_value = ":",
        help = INTERVAL_HELP,
        long_help = INTERVAL_HELP_LONG,
    )]
    pub interval: base::Interval,
}
