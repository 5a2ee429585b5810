//! Document store backend implementations

pub mod disconnected;
pub mod file;
pub mod memory;

pub use disconnected::DisconnectedBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;
