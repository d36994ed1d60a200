// Job search and interview question generation: format a prompt from the
// request, make one model call, return the reply verbatim.

pub mod handlers;
pub mod prompts;
