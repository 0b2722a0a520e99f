pub mod catalog;
pub mod filter;
