//! Data structures backing the global lookup maps.

pub mod tst;

pub use tst::Tst;
