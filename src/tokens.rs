//! LLM token counts with the `cl100k_base` encoding.

use thiserror::Error;
use tiktoken_rs::CoreBPE;

use crate::error::{CtLinesError, Result};

/// Special tokens of `cl100k_base`. Text containing one is rejected.
const CL100K_SPECIAL_TOKENS: [&str; 5] = [
    "<|endoftext|>",
    "<|fim_prefix|>",
    "<|fim_middle|>",
    "<|fim_suffix|>",
    "<|endofprompt|>",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenCountError {
    #[error("text contains the special token {0}")]
    SpecialToken(&'static str),
}

/// Counts tokens in a file's text. The aggregator treats the value as opaque.
pub trait TokenCounter: Send + Sync {
    /// # Errors
    /// Returns an error if the text cannot be encoded.
    fn count_tokens(&self, text: &str) -> std::result::Result<usize, TokenCountError>;
}

/// Byte-pair encoder for `cl100k_base`, loaded once per run.
pub struct Cl100kCounter {
    bpe: CoreBPE,
}

impl Cl100kCounter {
    /// # Errors
    /// Returns [`CtLinesError::Tokenizer`] if the encoding fails to load.
    pub fn new() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| CtLinesError::Tokenizer(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl TokenCounter for Cl100kCounter {
    fn count_tokens(&self, text: &str) -> std::result::Result<usize, TokenCountError> {
        if let Some(special) = CL100K_SPECIAL_TOKENS.iter().find(|t| text.contains(*t)) {
            return Err(TokenCountError::SpecialToken(*special));
        }
        Ok(self.bpe.encode_ordinary(text).len())
    }
}
