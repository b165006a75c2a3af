//! Reserved file names inside an exported collection tree.

use std::path::Path;

/// Files with a fixed name that the codec reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionFile {
    /// `.meta.json`: child ordering and folder description
    Meta,
    /// `.event.meta.json`: event file ordering
    EventMeta,
    /// `.info.json`: hoisted `info` key (root only)
    Info,
    /// `.auth.json`: hoisted `auth` key (root only)
    Auth,
    /// `.variable.json`: hoisted `variable` key (root only)
    Variable,
    /// `request.json`: the request object of a request item
    Request,
    /// `response.json`: saved responses of a request item
    Response,
}

impl CollectionFile {
    /// Sidecars that hoist one top-level document key.
    pub const ROOT_SIDECARS: [Self; 3] = [Self::Info, Self::Auth, Self::Variable];

    /// Get the on-disk file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meta => ".meta.json",
            Self::EventMeta => ".event.meta.json",
            Self::Info => ".info.json",
            Self::Auth => ".auth.json",
            Self::Variable => ".variable.json",
            Self::Request => "request.json",
            Self::Response => "response.json",
        }
    }

    /// The document key a root sidecar carries, if this is one.
    pub fn root_key(&self) -> Option<&'static str> {
        match self {
            Self::Info => Some("info"),
            Self::Auth => Some("auth"),
            Self::Variable => Some("variable"),
            _ => None,
        }
    }

    /// Look up a reserved file by name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        [
            Self::Meta,
            Self::EventMeta,
            Self::Info,
            Self::Auth,
            Self::Variable,
            Self::Request,
            Self::Response,
        ]
        .into_iter()
        .find(|file| file.as_str() == name)
    }

    /// Sidecars that are pure metadata and never become document content.
    pub fn is_metadata(&self) -> bool {
        matches!(self, Self::Meta | Self::EventMeta)
    }
}

impl AsRef<Path> for CollectionFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for CollectionFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for CollectionFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_sidecars_carry_their_key() {
        let keys: Vec<_> = CollectionFile::ROOT_SIDECARS
            .iter()
            .filter_map(|f| f.root_key())
            .collect();
        assert_eq!(keys, vec!["info", "auth", "variable"]);
    }

    #[test]
    fn lookup_by_file_name() {
        assert_eq!(
            CollectionFile::from_file_name(".event.meta.json"),
            Some(CollectionFile::EventMeta)
        );
        assert_eq!(CollectionFile::from_file_name("event.test.js"), None);
    }

    #[test]
    fn metadata_files() {
        assert!(CollectionFile::Meta.is_metadata());
        assert!(CollectionFile::EventMeta.is_metadata());
        assert!(!CollectionFile::Request.is_metadata());
    }
}
