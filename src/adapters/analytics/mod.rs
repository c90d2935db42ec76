//! Analytics adapters - implementations of `PageViewRecorder`.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryPageViewStore;
pub use postgres::PostgresPageViewStore;
