//! Infrastructure layer: configuration and in-memory boundary adapters.

pub mod config;
pub mod in_memory;

mod integration_tests;

pub use config::{ConfigError, InfraConfig};
pub use in_memory::{
    InMemoryCustomerDirectory, InMemoryFulfillment, InMemoryStockLevels, InMemoryTaxTable,
    LoggingNotifier,
};
