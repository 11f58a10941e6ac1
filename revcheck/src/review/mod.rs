//! Review fetch: request/result types, the OpenAI call, and the worker
//! thread that runs it off the event loop.

pub mod openai;
pub mod types;
pub mod worker;
