use crate::base;

/// The resident dataset: every category, transaction, and spending item,
/// loaded together and only read afterwards.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Book {
    categories: base::Categories,
    transactions: base::Transactions,
    items: base::SpendingItems,
    /// Indices into `items`, grouped by owning transaction.
    items_by_transaction: std::collections::HashMap<base::TransactionId, Vec<usize>>,
}

impl Book {
    pub fn new(
        categories: base::Categories,
        transactions: base::Transactions,
        items: base::SpendingItems,
    ) -> Self {
        let mut items_by_transaction =
            std::collections::HashMap::<base::TransactionId, Vec<usize>>::new();
        for (i, item) in items.iter().enumerate() {
            items_by_transaction
                .entry(item.transaction_id())
                .or_default()
                .push(i);
        }
        Self {
            categories,
            transactions,
            items,
            items_by_transaction,
        }
    }

    pub fn categories(&self) -> &base::Categories {
        &self.categories
    }

    pub fn transactions(&self) -> &base::Transactions {
        &self.transactions
    }

    pub fn items(&self) -> &base::SpendingItems {
        &self.items
    }

    /// Spending items owned by the given transaction, in storage order.
    pub fn items_of(&self, id: base::TransactionId) -> Vec<&base::SpendingItem> {
        self.items_by_transaction
            .get(&id)
            .map(|ixs| ixs.iter().map(|&i| &self.items.as_slice()[i]).collect())
            .unwrap_or_default()
    }

    pub fn tree(&self) -> Result<base::Categorytree<'_>, base::categorytree::StructureError> {
        base::Categorytree::new(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_of() {
        let book = Book::new(
            base::Categories::new(),
            base::Transactions::new(),
            r#"
                {"transaction":1,"price":1}
                {"transaction":2,"price":2}
                {"transaction":1,"price":3,"qty":2}
            "#
            .parse()
            .unwrap(),
        );
        let got = book
            .items_of(base::TransactionId(1))
            .iter()
            .map(|i| i.amount().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(got, vec![base::Cents(100), base::Cents(600)]);
        assert!(book.items_of(base::TransactionId(3)).is_empty());
    }
}
