pub mod memory;
pub mod repository;
pub mod session;

pub use memory::InMemoryRepository;
pub use repository::{Entity, Repository, RepositoryError};
pub use session::{InMemorySessionStore, SessionStore};
