//! Random handle discovery - keep a small sample of available handles on hand
//!
//! Candidates come from a fixed word list; each draw is checked against the
//! naming service and only available handles make it into a sample.

mod board;
mod pool;
mod sampler;
mod words;

pub use board::{PublishedSample, SampleBoard};
pub use pool::CandidatePool;
pub use sampler::HandleSampler;
pub use words::{builtin_words, COMMON_NAMES, COMMON_WORDS};
