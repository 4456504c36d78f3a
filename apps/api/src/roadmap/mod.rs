// Roadmap generation: prompt construction, model call, tolerant JSON
// extraction and shape normalization.
// All model calls go through llm_client; no direct Gemini calls here.

pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
