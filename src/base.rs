mod aggregate;
mod amountsource;
pub mod barchart;
mod book;
mod category;
pub mod categorytree;
pub mod cents;
mod charset;
mod config;
pub mod date;
pub mod fs;
pub mod interval;
pub mod jsonl;
mod transaction;
pub mod tree;
pub mod util;
pub mod view;
mod weekly;

pub use aggregate::Aggregate;
pub use amountsource::AmountSource;
pub use book::Book;
pub use category::Category;
pub use category::CategoryId;
pub use categorytree::Categorytree;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use fs::Fs;
pub use interval::Interval;
pub use jsonl::Jsonl;
pub use transaction::SpendingItem;
pub use transaction::Transaction;
pub use transaction::TransactionId;
pub use tree::Tree;
pub use view::Report;
pub use view::Target;
pub use view::ViewRequest;
pub use view::WeeklyRow;
pub use weekly::Selector;
pub use weekly::Series;
pub use weekly::weekly_spending;

pub type Categories = Jsonl<Category>;
pub type Transactions = Jsonl<Transaction>;
pub type SpendingItems = Jsonl<SpendingItem>;
