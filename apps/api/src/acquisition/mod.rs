// Voice-assisted profile acquisition: uploaded audio → transcript →
// structured field extraction → profile merge. Each stage fails with its own
// error so the client can name the failing step; the pipeline never retries
// itself — the user re-triggers the whole acquisition.

pub mod extractor;
pub mod handlers;
pub mod transcribe;
