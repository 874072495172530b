use crate::base;

/// Where a transaction's spending amount comes from. Decided per transaction:
/// line items win when there are any, otherwise the transaction's own
/// override amount is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountSource {
    /// One amount (price × quantity) per spending item.
    Itemized(Vec<base::Cents>),
    /// Absolute value of the transaction's override amount.
    Override(base::Cents),
}

impl AmountSource {
    /// Returns `None` for a transaction with neither items nor an override
    /// amount; such a transaction contributes nothing.
    pub fn resolve(
        t: &base::Transaction,
        items: &[&base::SpendingItem],
    ) -> Result<Option<Self>, base::cents::OverflowError> {
        if !items.is_empty() {
            let amounts = items
                .iter()
                .map(|i| i.amount())
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Some(Self::Itemized(amounts)));
        }
        t.override_money()
            .map(|m| m.checked_abs().map(Self::Override))
            .transpose()
    }

    pub fn amount(&self) -> Result<base::Cents, base::cents::OverflowError> {
        match self {
            Self::Itemized(amounts) => amounts
                .iter()
                .try_fold(base::Cents(0), |acc, &x| acc.checked_add(x)),
            Self::Override(amount) => Ok(*amount),
        }
    }
}
