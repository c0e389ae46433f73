use std::fmt;
use std::path::PathBuf;

/// A file the user asked to open, before the pipeline has materialized
/// it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReference {
    /// Managed content addressed through a provider rather than a
    /// filesystem path. The provider supplies the display name and the
    /// byte stream.
    Content { uri: String },
    /// A direct filesystem reference. `path` is the path component of
    /// the reference; when no such file exists locally the original
    /// `uri` is what gets downloaded.
    Direct { uri: String, path: PathBuf },
}

impl FileReference {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("content:") {
            return Self::Content {
                uri: raw.to_string(),
            };
        }
        Self::Direct {
            uri: raw.to_string(),
            path: url_path(raw),
        }
    }

    /// Last path component, used to name the materialized file.
    pub fn display_name(&self) -> Option<String> {
        match self {
            Self::Content { uri } => uri
                .rsplit('/')
                .next()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            Self::Direct { path, .. } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
        }
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content { uri } => write!(f, "{uri}"),
            Self::Direct { uri, .. } => write!(f, "{uri}"),
        }
    }
}

/// Path component of a URL-shaped reference; plain paths pass through.
fn url_path(raw: &str) -> PathBuf {
    match raw.split_once("://") {
        Some((_, rest)) => match rest.find('/') {
            Some(i) => PathBuf::from(&rest[i..]),
            None => PathBuf::new(),
        },
        None => PathBuf::from(raw),
    }
}
