use crate::base;

/// Unique identifier of a transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

/// A dated payment, optionally assigned to a category.
///
/// The date is kept as it was entered. It is parsed on demand, and
/// transactions whose date does not parse are left out of every aggregate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    id: TransactionId,
    #[serde(default)]
    date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<base::CategoryId>,
    /// Amount used when the transaction has no itemized breakdown.
    #[serde(
        rename = "override",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    override_money: Option<base::Cents>,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: impl Into<String>,
        category: Option<base::CategoryId>,
        override_money: Option<base::Cents>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            category,
            override_money,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn raw_date(&self) -> &str {
        &self.date
    }

    pub fn date(&self) -> Result<base::Date, base::date::ParseError> {
        base::Date::from_record_str(&self.date)
    }

    /// `None` means the transaction is unassigned.
    pub fn category(&self) -> Option<base::CategoryId> {
        self.category
    }

    pub fn override_money(&self) -> Option<base::Cents> {
        self.override_money
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// A purchased line item belonging to exactly one transaction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpendingItem {
    #[serde(rename = "transaction")]
    transaction_id: TransactionId,
    #[serde(rename = "price")]
    display_price: base::Cents,
    #[serde(rename = "qty", default = "SpendingItem::default_quantity")]
    num_purchased: u32,
}

impl SpendingItem {
    fn default_quantity() -> u32 {
        1
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    pub fn amount(&self) -> Result<base::Cents, base::cents::OverflowError> {
        self.display_price.checked_times(self.num_purchased)
    }
}

impl std::fmt::Display for SpendingItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for SpendingItem {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
