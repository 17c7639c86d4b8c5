//! Connection registry adapters.
//!
//! - `InMemoryConnectionRegistry` - Subscribers of this process, with
//!   bounded per-push delivery and drain-on-shutdown

mod in_memory;

pub use in_memory::{InMemoryConnectionRegistry, DEFAULT_SEND_TIMEOUT};
