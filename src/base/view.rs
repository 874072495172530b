use crate::base;

/// One point of a labelled weekly time series.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WeeklyRow {
    pub week_start: base::Date,
    pub amount: base::Cents,
    pub label: String,
}

/// What to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Every root category with its descendants, plus unassigned spending.
    Combined,
    /// A single category with its descendants. With `breakdown`, one series
    /// per direct child plus one for spending on the category itself.
    Category {
        id: base::CategoryId,
        breakdown: bool,
    },
    /// Transactions without a category.
    Unassigned,
}

/// A self-contained description of a spending view. Running it is a pure
/// function of the request and the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRequest {
    pub target: Target,
    pub interval: base::Interval,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("no category with id {0}")]
    UnknownCategory(base::CategoryId),
}

pub const UNASSIGNED: &str = "Unassigned";
pub const ORPHANED: &str = "(Orphaned)";

impl ViewRequest {
    /// Runs the view over `book`, whose categories `tree` was built from.
    pub fn run(&self, book: &base::Book, tree: &base::Categorytree) -> Result<Report, ViewError> {
        let rows = match self.target {
            Target::Combined => combined(book, tree, self.interval),
            Target::Unassigned => unassigned(book, self.interval),
            Target::Category { id, breakdown: b } => {
                let category = tree.get(id).ok_or(ViewError::UnknownCategory(id))?;
                if b {
                    breakdown(book, tree, category, self.interval)
                } else {
                    category_spending(book, tree, category, self.interval)
                }
            }
        };
        Ok(Report { rows })
    }
}

fn labelled(series: base::Series, label: &str) -> impl Iterator<Item = WeeklyRow> + '_ {
    series.into_iter().map(move |(week_start, amount)| WeeklyRow {
        week_start,
        amount,
        label: label.to_string(),
    })
}

fn rows_for(
    book: &base::Book,
    selector: &base::Selector,
    interval: base::Interval,
    label: &str,
) -> Vec<WeeklyRow> {
    labelled(base::weekly_spending(book, selector, interval), label).collect()
}

/// Weekly spending on `category` and all of its descendants, labelled with
/// the category's name.
pub fn category_spending(
    book: &base::Book,
    tree: &base::Categorytree,
    category: &base::Category,
    interval: base::Interval,
) -> Vec<WeeklyRow> {
    let selector = base::Selector::Categories(tree.resolve_descendants(category.id()));
    rows_for(book, &selector, interval, category.label())
}

/// Weekly spending of transactions that have no category.
pub fn unassigned(book: &base::Book, interval: base::Interval) -> Vec<WeeklyRow> {
    rows_for(book, &base::Selector::Unassigned, interval, UNASSIGNED)
}

/// Weekly spending of `parent` split by its direct children.
///
/// Each named child gets a series over its own descendants. Unnamed children
/// are pooled into a single `"<parent> (Unnamed)"` series, and transactions
/// assigned to the parent itself form `"<parent> (Direct)"`. A parent without
/// children yields its plain aggregate series.
pub fn breakdown(
    book: &base::Book,
    tree: &base::Categorytree,
    parent: &base::Category,
    interval: base::Interval,
) -> Vec<WeeklyRow> {
    let children = tree.children(parent.id());
    if children.is_empty() {
        return category_spending(book, tree, parent, interval);
    }

    let mut rows = Vec::new();
    let mut unnamed = std::collections::BTreeSet::new();
    for child in children {
        match child.name() {
            Some(name) => {
                let selector = base::Selector::Categories(tree.resolve_descendants(child.id()));
                rows.extend(rows_for(book, &selector, interval, name));
            }
            None => {
                tracing::warn!(
                    category = %child.id(),
                    parent = %parent.id(),
                    "category has no name; pooling its spending as unnamed"
                );
                unnamed.extend(tree.resolve_descendants(child.id()));
            }
        }
    }
    if !unnamed.is_empty() {
        let label = format!("{} {}", parent.label(), base::Category::UNNAMED);
        rows.extend(rows_for(
            book,
            &base::Selector::Categories(unnamed),
            interval,
            &label,
        ));
    }
    let label = format!("{} (Direct)", parent.label());
    rows.extend(rows_for(
        book,
        &base::Selector::Exactly(parent.id()),
        interval,
        &label,
    ));
    rows
}

/// Weekly spending of every root category (descendants included), followed
/// by unassigned spending.
///
/// Unnamed roots are pooled under [`base::Category::UNNAMED`]. Categories
/// whose parent does not exist cannot be reached from any root; their
/// subtrees are pooled under [`ORPHANED`].
pub fn combined(
    book: &base::Book,
    tree: &base::Categorytree,
    interval: base::Interval,
) -> Vec<WeeklyRow> {
    let mut rows = Vec::new();
    let mut unnamed = std::collections::BTreeSet::new();
    for root in tree.root_categories() {
        match root.name() {
            Some(_) => rows.extend(category_spending(book, tree, root, interval)),
            None => {
                tracing::warn!(
                    category = %root.id(),
                    "category has no name; pooling its spending as unnamed"
                );
                unnamed.extend(tree.resolve_descendants(root.id()));
            }
        }
    }
    if !unnamed.is_empty() {
        rows.extend(rows_for(
            book,
            &base::Selector::Categories(unnamed),
            interval,
            base::Category::UNNAMED,
        ));
    }

    let mut orphaned = std::collections::BTreeSet::new();
    for orphan in tree.orphans() {
        tracing::warn!(
            category = %orphan.id(),
            parent = ?orphan.parent(),
            "category refers to a missing parent"
        );
        orphaned.extend(tree.resolve_descendants(orphan.id()));
    }
    if !orphaned.is_empty() {
        rows.extend(rows_for(
            book,
            &base::Selector::Categories(orphaned),
            interval,
            ORPHANED,
        ));
    }

    rows.extend(unassigned(book, interval));
    rows
}

/// Result of running a [`ViewRequest`]: the concatenated series in the order
/// they were produced, each ascending by week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<WeeklyRow>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: base::Cents,
    /// Mean of the per-week totals, rounded to the nearest cent.
    pub average_weekly: base::Cents,
    /// Number of distinct weeks with spending.
    pub weeks: usize,
}

impl Report {
    pub fn rows(&self) -> &[WeeklyRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Amount per week across all labels, ascending by week.
    pub fn weekly_totals(&self) -> base::Aggregate<base::Date, base::Cents> {
        self.rows.iter().map(|r| (r.week_start, r.amount)).collect()
    }

    pub fn summary(&self) -> Summary {
        let weekly = self.weekly_totals();
        let weeks = weekly.len();
        let total = weekly.sum();
        let average_weekly = match weeks {
            0 => base::Cents(0),
            n => base::Cents((total.0 as f64 / n as f64).round() as i64),
        };
        Summary {
            total,
            average_weekly,
            weeks,
        }
    }

    /// Total per label, largest first. Ties are ordered by label.
    pub fn label_totals(&self) -> Vec<(&str, base::Cents)> {
        let agg = self
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.amount))
            .collect::<base::Aggregate<_, _>>();
        let mut v = agg.into_iter().collect::<Vec<_>>();
        v.sort_by(|&(l1, a1), &(l2, a2)| a2.cmp(&a1).then_with(|| l1.cmp(l2)));
        v
    }
}

impl From<Vec<WeeklyRow>> for Report {
    fn from(rows: Vec<WeeklyRow>) -> Self {
        Self { rows }
    }
}
