//! Domain entities - the core business objects.

mod blog;
mod feedback;
mod request;

pub use blog::{GenerationResult, new_blog_id, object_key};
pub use feedback::FeedbackRecord;
pub use request::{BlogRequest, FeedbackSubmission, GenerationRequest, MAX_RATING, MIN_RATING};
