// Resume analysis: extracted text fans out to one feedback request per
// catalog category (or a single custom prompt), keyed by category.
// All LLM calls go through llm_client; no direct Groq calls here.

pub mod feedback;
pub mod handlers;
pub mod prompts;
