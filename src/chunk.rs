use crate::error::SyncError;
use crate::model::{CaptionChunk, WordTiming};

/// Partition an ordered word timeline into caption chunks of `chunk_size`
/// consecutive words; the final chunk may be short. Each chunk spans from
/// its first word's start to its last word's end, and its text is the
/// words joined by single spaces, untouched otherwise.
pub fn chunk_words(
    words: &[WordTiming],
    chunk_size: usize,
) -> Result<Vec<CaptionChunk>, SyncError> {
    if chunk_size < 1 {
        return Err(SyncError::InvalidArgument(format!(
            "chunk size must be at least 1, got {chunk_size}"
        )));
    }

    let mut chunks = Vec::with_capacity(words.len().div_ceil(chunk_size));

    for (i, group) in words.chunks(chunk_size).enumerate() {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };

        let text = group
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        chunks.push(CaptionChunk {
            index: i + 1,
            start_s: first.start_s,
            end_s: last.end_s,
            text,
        });
    }

    Ok(chunks)
}
