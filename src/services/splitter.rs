use crate::error::Result;
use crate::types::validate_chunk_params;
use std::collections::VecDeque;
use tracing::debug;

/// Separators tried in order, coarsest first. The empty separator splits
/// into single characters and always matches.
const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Splits a block of text into an ordered list of substrings.
pub trait TextSplitter {
    fn split_text(&self, text: &str) -> Vec<String>;
}

/// Greedy splitter that prefers paragraph, then line, then word boundaries
/// and falls back to single characters. Lengths are counted in chars.
#[derive(Debug, Clone)]
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<&'static str>,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        validate_chunk_params(chunk_size, chunk_overlap)?;

        Ok(Self {
            chunk_size,
            chunk_overlap,
            separators: DEFAULT_SEPARATORS.to_vec(),
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    fn split_recursive(&self, text: &str, separators: &[&'static str]) -> Vec<String> {
        let mut final_chunks = Vec::new();

        // Pick the coarsest separator present in the text
        let mut separator = separators.last().copied().unwrap_or("");
        let mut finer: &[&'static str] = &[];
        for (idx, &candidate) in separators.iter().enumerate() {
            if candidate.is_empty() {
                separator = candidate;
                break;
            }
            if text.contains(candidate) {
                separator = candidate;
                finer = &separators[idx + 1..];
                break;
            }
        }

        let mut small_pieces: Vec<String> = Vec::new();

        for piece in split_keeping_separator(text, separator) {
            if char_len(&piece) < self.chunk_size {
                small_pieces.push(piece);
                continue;
            }

            if !small_pieces.is_empty() {
                final_chunks.extend(self.merge_pieces(&small_pieces));
                small_pieces.clear();
            }

            if finer.is_empty() {
                final_chunks.push(piece);
            } else {
                final_chunks.extend(self.split_recursive(&piece, finer));
            }
        }

        if !small_pieces.is_empty() {
            final_chunks.extend(self.merge_pieces(&small_pieces));
        }

        final_chunks
    }

    /// Packs pieces into windows of at most `chunk_size` chars, carrying up
    /// to `chunk_overlap` trailing chars into the next window.
    fn merge_pieces(&self, pieces: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<(&str, usize)> = VecDeque::new();
        let mut total = 0;

        for piece in pieces {
            let len = char_len(piece);

            if total + len > self.chunk_size {
                if total > self.chunk_size {
                    debug!(
                        "Created a chunk of {} chars, longer than the configured {}",
                        total, self.chunk_size
                    );
                }

                if !window.is_empty() {
                    if let Some(chunk) = join_window(&window) {
                        chunks.push(chunk);
                    }

                    while total > self.chunk_overlap
                        || (total + len > self.chunk_size && total > 0)
                    {
                        match window.pop_front() {
                            Some((_, front_len)) => total -= front_len,
                            None => break,
                        }
                    }
                }
            }

            window.push_back((piece.as_str(), len));
            total += len;
        }

        if let Some(chunk) = join_window(&window) {
            chunks.push(chunk);
        }

        chunks
    }
}

impl TextSplitter for RecursiveCharacterSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, &self.separators)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits on `separator`, leaving each separator at the start of the piece
/// that follows it. Empty pieces are dropped.
fn split_keeping_separator(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }

    let mut pieces = Vec::new();
    let mut start = 0;

    for (idx, _) in text.match_indices(separator) {
        if idx > start {
            pieces.push(text[start..idx].to_string());
        }
        start = idx;
    }

    if start < text.len() {
        pieces.push(text[start..].to_string());
    }

    pieces
}

fn join_window(window: &VecDeque<(&str, usize)>) -> Option<String> {
    let joined: String = window.iter().map(|(piece, _)| *piece).collect();
    let trimmed = joined.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
