//! Dialog runtime adapters.

mod in_memory;

pub use in_memory::InMemoryDialogRuntime;
