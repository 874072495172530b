use crate::base;
use crate::cli;

/// View the category tree
#[derive(clap::Parser)]
pub struct Cats {
    /// Wildcard patterns to match category names of interest
    ///
    /// Matching ignores case. Each matching category is shown with all of its
    /// descendants. Without patterns, every root category is shown.
    pub patterns: Vec<String>,
}

impl Cats {
    pub fn run(&self, book: base::Book, config: &base::Config) -> anyhow::Result<cli::Output> {
        let charset = base::Charset::from_config(config);
        let categories = book.categories().clone();
        let tr_config = if self.patterns.is_empty() {
            base::tree::forcats::Config::new(charset, categories)?
        } else {
            let patterns = self
                .patterns
                .iter()
                .map(|s| wildmatch::WildMatch::new(&s.to_lowercase()))
                .collect::<Vec<_>>();
            base::tree::forcats::Config::with_filter(charset, categories, |c| {
                c.name().is_some_and(|name| {
                    let name = name.to_lowercase();
                    patterns.iter().any(|p| p.matches(&name))
                })
            })?
        };
        Ok(cli::Output::TreeForCats(tr_config))
    }
}
