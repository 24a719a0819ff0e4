//! Engine build tests

mod build_tests;
mod entry_tests;
mod isolation_tests;
