//! Ports - trait definitions for the external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod feedback_store;
mod inference;
mod object_store;

pub use feedback_store::{FeedbackStore, RecordStoreError};
pub use inference::{InferenceError, SamplingParams, TextGenerator};
pub use object_store::{ObjectStore, ObjectStoreError};
