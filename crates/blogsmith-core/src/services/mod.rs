//! Services - the request pipeline and the text operations it is built from.

mod blog;
pub mod postprocess;
pub mod prompt;

pub use blog::{BlogService, DEFAULT_KEY_PREFIX, Reply};
pub use postprocess::clean_generation;
pub use prompt::{GenerationSettings, build_prompt};
