mod file_repo;
mod memory;

pub use file_repo::{FileProfileRepository, DEFAULT_PROFILE_FILE};
pub use memory::InMemoryProfileRepository;
