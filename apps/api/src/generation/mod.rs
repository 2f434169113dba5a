// Résumé generation: prompt building, narrative section extraction, and
// assembly of the fixed-shape document model.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod assembler;
pub mod handlers;
pub mod prompts;
