use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while reading a hex image
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{}: {}", path.display(), source)]
    Open { path: PathBuf, source: io::Error },

    #[error("Invalid hex word on line {line}: {text:?}")]
    InvalidWord { line: usize, text: String },
}

/// A preassembled program: the text and data segments as 32-bit words
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    /// Instructions, in the order they are laid out from the text offset
    pub text: Vec<u32>,
    /// Initial data, in the order it is laid out from the data offset
    pub data: Vec<u32>,
}

impl ProgramImage {
    /// Parse the text and data segments from readers
    pub fn parse<T: BufRead, D: BufRead>(text: T, data: D) -> Result<Self, ImageError> {
        let text = parse_words(text)?;
        let data = parse_words(data)?;
        info!(
            "Parsed image with {} text words and {} data words",
            text.len(),
            data.len()
        );

        Ok(Self { text, data })
    }

    /// Read the text and data segments from files
    pub fn from_files(text_path: &Path, data_path: &Path) -> Result<Self, ImageError> {
        let text = BufReader::new(open(text_path)?);
        let data = BufReader::new(open(data_path)?);

        Self::parse(text, data)
    }
}

fn open(path: &Path) -> Result<File, ImageError> {
    File::open(path).map_err(|source| ImageError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse one hex word per line. Blank lines are skipped.
/// A word is one to eight hex digits with no prefix or sign.
pub fn parse_words<R: BufRead>(input: R) -> Result<Vec<u32>, ImageError> {
    let mut words = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();

        if text.is_empty() {
            continue;
        }

        let invalid_word = || ImageError::InvalidWord {
            line: index + 1,
            text: text.to_string(),
        };

        if !text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_word());
        }

        let word = u32::from_str_radix(text, 16).map_err(|_| invalid_word())?;
        words.push(word);
    }

    Ok(words)
}
