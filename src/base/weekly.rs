use crate::base;

/// Which transactions a weekly series is computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Transactions assigned to any of the given categories.
    Categories(std::collections::BTreeSet<base::CategoryId>),
    /// Transactions assigned to exactly this category.
    Exactly(base::CategoryId),
    /// Transactions with no category.
    Unassigned,
}

impl Selector {
    pub fn matches(&self, category: Option<base::CategoryId>) -> bool {
        match (self, category) {
            (Self::Categories(ids), Some(id)) => ids.contains(&id),
            (Self::Exactly(want), Some(id)) => *want == id,
            (Self::Unassigned, None) => true,
            _ => false,
        }
    }
}

/// Week start (a Monday) and the amount spent that week, ascending by week.
pub type Series = Vec<(base::Date, base::Cents)>;

/// Sums the spending of every selected transaction dated within `interval`
/// into Monday-aligned calendar weeks.
///
/// Transactions whose date does not parse, transactions with neither
/// spending items nor an override amount, and transactions whose amount
/// overflows are skipped.
pub fn weekly_spending(
    book: &base::Book,
    selector: &Selector,
    interval: base::Interval,
) -> Series {
    let mut agg = base::Aggregate::<base::Date, base::Cents>::default();
    let mut matched = 0usize;
    for t in book.transactions().iter() {
        if !selector.matches(t.category()) {
            continue;
        }
        matched += 1;
        let date = match t.date() {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!(
                    transaction = %t.id(),
                    date = t.raw_date(),
                    "skipping transaction: {}",
                    e
                );
                continue;
            }
        };
        if !interval.contains(date) {
            continue;
        }
        let items = book.items_of(t.id());
        let source = match base::AmountSource::resolve(t, &items) {
            Ok(Some(source)) => source,
            Ok(None) => {
                tracing::debug!(transaction = %t.id(), "skipping transaction without an amount");
                continue;
            }
            Err(e) => {
                tracing::debug!(transaction = %t.id(), "skipping transaction: {}", e);
                continue;
            }
        };
        let added = source
            .amount()
            .and_then(|amount| agg.try_add(date.week_start(), amount));
        if let Err(e) = added {
            tracing::debug!(transaction = %t.id(), "skipping transaction: {}", e);
        }
    }
    tracing::trace!(
        ?selector,
        matched,
        weeks = agg.len(),
        total = %agg.sum(),
        "computed weekly spending"
    );
    agg.into_iter().collect()
}
