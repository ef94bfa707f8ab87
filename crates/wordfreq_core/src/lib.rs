//! Wordfreq core: pure tokenize/chunk/count/merge/top-k building blocks.
mod chunk;
mod count;
mod tokenize;
mod topk;

pub use chunk::{chunk_tokens, ChunkError};
pub use count::{count_tokens, merge_counts, FrequencyMap};
pub use tokenize::tokenize;
pub use topk::top_k;
