//! In-memory adapter implementations of the board ports.

mod live;
mod repository;

pub use live::InMemoryLiveChannel;
pub use repository::InMemoryTaskRepository;
