//! Prompt construction and sampling parameters.

use crate::domain::GenerationRequest;
use crate::ports::SamplingParams;

/// Tunable generation constants.
///
/// `max_gen_len` scales with the requested length and is capped at
/// `max_len_ceiling`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub max_len_ceiling: u32,
    pub len_multiplier: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_len_ceiling: 2048,
            len_multiplier: 4,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

impl GenerationSettings {
    /// Sampling parameters for a post of `word_count` words.
    pub fn sampling_for(&self, word_count: u32) -> SamplingParams {
        SamplingParams {
            max_gen_len: word_count
                .saturating_mul(self.len_multiplier)
                .min(self.max_len_ceiling),
            temperature: self.temperature,
            top_p: self.top_p,
        }
    }
}

/// Build the instruction prompt for a generation request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let topics = request.topics.join(", ");

    format!(
        "Write a coherent and well-structured blog post on the following topics: {topics}.\n\
         The blog should be approximately {words} words long.\n\
         Use a {tone} tone and target the {audience} audience.\n\
         Ensure smooth transitions between topics.\n\
         \n\
         Format the blog post as follows:\n\
         1. Start with a title enclosed in ** (e.g., **Title**)\n\
         2. Include an introduction\n\
         3. Have 2-3 main sections with subheadings\n\
         4. End with a conclusion\n\
         \n\
         Do not include any instructions or notes about proofreading in the final output.",
        words = request.word_count,
        tone = request.tone,
        audience = request.target_audience,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_request() {
        let request = GenerationRequest {
            topics: vec!["rust".to_string(), "embedded systems".to_string()],
            word_count: 800,
            tone: "formal".to_string(),
            target_audience: "engineers".to_string(),
        };

        let prompt = build_prompt(&request);

        assert!(prompt.contains("following topics: rust, embedded systems."));
        assert!(prompt.contains("approximately 800 words"));
        assert!(prompt.contains("Use a formal tone and target the engineers audience."));
        assert!(prompt.contains("**Title**"));
        assert!(prompt.contains("notes about proofreading"));
    }

    #[test]
    fn test_max_gen_len_scales_then_caps() {
        let settings = GenerationSettings::default();

        assert_eq!(settings.sampling_for(100).max_gen_len, 400);
        assert_eq!(settings.sampling_for(500).max_gen_len, 2000);
        assert_eq!(settings.sampling_for(2000).max_gen_len, 2048);
        assert_eq!(settings.sampling_for(u32::MAX).max_gen_len, 2048);
    }

    #[test]
    fn test_sampling_constants_pass_through() {
        let settings = GenerationSettings {
            temperature: 0.2,
            top_p: 0.5,
            ..Default::default()
        };

        let params = settings.sampling_for(300);
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.top_p, 0.5);
    }
}
