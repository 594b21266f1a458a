use std::path::PathBuf;

/// Fatal startup conditions. Everything that can go wrong during the search
/// itself (a signature with no compatible neighbours, a word group that
/// cannot be built from the bag) is an ordinary empty result, not an error.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: malformed entry {text:?}", path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        text: String,
    },
}
