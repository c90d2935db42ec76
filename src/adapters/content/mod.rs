//! Content adapters - implementations of `CompositionLoader`.
//!
//! - `FileCompositionLoader` - JSON/YAML documents on disk
//! - `HttpCompositionLoader` - content API with retry and backoff
//! - `InMemoryCompositionLoader` - fixed list for tests and demos

mod document;
mod file_loader;
mod http_loader;
mod in_memory;
mod retry;

pub use document::{CompositionDocument, DocumentFormat, SectionDocument};
pub use file_loader::FileCompositionLoader;
pub use http_loader::{HttpCompositionLoader, HttpLoaderConfig};
pub use in_memory::InMemoryCompositionLoader;
pub use retry::RetryPolicy;
