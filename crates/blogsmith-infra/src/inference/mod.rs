//! Inference adapters.

mod bedrock;

pub use bedrock::{BedrockTextGenerator, InferenceConfig};
