use crate::engine::OsErrorDisplay;
use crate::reading::{tokenize_reader, Token, TokenizedText};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not parse file - {}", OsErrorDisplay(.source))]
    Open { path: PathBuf, source: io::Error },

    /// Reading failed part way; `partial` holds what was read before it.
    #[error("Could not parse file - {}", OsErrorDisplay(.source))]
    Read {
        path: PathBuf,
        source: io::Error,
        partial: LoadedDocument,
    },
}

impl LoadError {
    /// The document state at the point of failure. Empty when the file never opened.
    pub fn into_partial(self) -> LoadedDocument {
        match self {
            LoadError::Open { path, .. } => LoadedDocument::empty(path),
            LoadError::Read { partial, .. } => partial,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. } | LoadError::Read { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            LoadError::Open { source, .. } | LoadError::Read { source, .. } => source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub text: TokenizedText,
    pub source: PathBuf,
}

impl LoadedDocument {
    pub fn empty(source: impl Into<PathBuf>) -> Self {
        Self {
            text: TokenizedText::default(),
            source: source.into(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.text.tokens
    }

    pub fn char_count(&self) -> usize {
        self.text.char_count
    }
}

/// Opens `path` and tokenizes it line by line.
///
/// The file handle lives only for the duration of this call and is closed on
/// every exit path.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(BufReader::new(file), path)
}

/// Tokenizes an already-open stream, labelling the result with `source`.
pub fn load_from_reader<R: BufRead>(reader: R, source: &Path) -> Result<LoadedDocument, LoadError> {
    let mut document = LoadedDocument::empty(source);
    match tokenize_reader(reader, &mut document.text) {
        Ok(()) => Ok(document),
        Err(err) => Err(LoadError::Read {
            path: source.to_path_buf(),
            source: err,
            partial: document,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_nonexistent_file_error() {
        let result = load(Path::new("/nonexistent/path/words_12345.txt"));
        match result {
            Err(LoadError::Open { ref source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound)
            }
            _ => panic!("Expected Open error"),
        }
    }

    #[test]
    fn test_open_error_message_has_errno() {
        let err = load(Path::new("/nonexistent/path/words_12345.txt")).unwrap_err();
        assert_eq!(err.path(), Path::new("/nonexistent/path/words_12345.txt"));
        let message = err.to_string();
        assert!(message.starts_with("Could not parse file - (2): "), "got {message}");
    }

    #[test]
    fn test_open_error_partial_is_empty() {
        let err = load(Path::new("/nonexistent/words.txt")).unwrap_err();
        let partial = err.into_partial();
        assert!(partial.tokens().is_empty());
        assert_eq!(partial.char_count(), 0);
    }

    #[test]
    fn test_valid_file_loads() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ab- cd\nxy").unwrap();

        let document = load(file.path()).expect("Should load file successfully");
        assert_eq!(document.tokens(), ["ab-", "cd", "xy"]);
        assert_eq!(document.char_count(), 9);
        assert_eq!(document.source, file.path());
    }

    #[test]
    fn test_empty_file_loads_as_empty_document() {
        let file = NamedTempFile::new().unwrap();
        let document = load(file.path()).unwrap();
        assert!(document.tokens().is_empty());
        assert_eq!(document.char_count(), 0);
    }

    #[test]
    fn test_read_error_keeps_partial_tokens() {
        let bytes = b"first second\n\xc3\x28 broken\n".to_vec();
        let err = load_from_reader(Cursor::new(bytes), Path::new("stream")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert_eq!(err.path(), Path::new("stream"));
        assert_eq!(err.io_error().kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("Could not parse file - (-): "));

        let partial = err.into_partial();
        assert_eq!(partial.tokens(), ["first", "second"]);
        assert_eq!(partial.char_count(), 13);
    }
}
