use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk count must be at least 1")]
    InvalidChunkCount,
}

/// Partition a token sequence into `chunk_count` contiguous slices of
/// `floor(len / chunk_count)` tokens each, starting at offset 0.
///
/// Any trailing remainder beyond `chunk_count * floor(len / chunk_count)` is
/// excluded from every chunk. When `chunk_count` exceeds the sequence length,
/// the chunk size is 0 and all returned slices are empty.
pub fn chunk_tokens(tokens: &[String], chunk_count: usize) -> Result<Vec<&[String]>, ChunkError> {
    if chunk_count == 0 {
        return Err(ChunkError::InvalidChunkCount);
    }

    let chunk_size = tokens.len() / chunk_count;
    let chunks = (0..chunk_count)
        .map(|i| &tokens[i * chunk_size..(i + 1) * chunk_size])
        .collect();
    Ok(chunks)
}
