pub mod cats;
pub mod init;
pub mod plot;
pub mod root;
pub mod totals;
pub mod weekly;
