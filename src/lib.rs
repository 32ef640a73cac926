pub mod classifiers;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod inference;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod ui;
