//! File extension keys and extension filters.
//!
//! Every scanned file is classified under exactly one [`ExtensionKey`]. The
//! [`ExtensionFilter`] is the separate, suffix-based matcher used when only a
//! subset of file types should be counted.

use std::{
    ffi::OsStr,
    fmt::{Display, Formatter, Result},
    path::Path,
};

/// Lowercased file suffix used to group sizes.
///
/// The suffix is whatever follows the last dot of the file name, lowercased
/// and stored with its leading dot (`".py"`). Names without a usable suffix
/// fall under [`ExtensionKey::NoExtension`]:
///
/// - `Makefile` (no dot)
/// - `.gitignore` (the only dot is the leading one)
/// - `notes.` (nothing after the last dot)
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum ExtensionKey {
    /// A suffix such as `".rs"`, always lowercase with a leading dot
    Named(String),

    /// The file name carries no suffix
    NoExtension,
}

impl ExtensionKey {
    /// Label printed for files without a suffix.
    pub const NO_EXTENSION_LABEL: &'static str = "(no extension)";

    /// Classify a file by its name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::ffi::OsStr;
    /// # use folder_size::model::ExtensionKey;
    /// assert_eq!(
    ///     ExtensionKey::from_file_name(OsStr::new("Main.PY")),
    ///     ExtensionKey::Named(".py".to_string())
    /// );
    /// assert_eq!(
    ///     ExtensionKey::from_file_name(OsStr::new(".gitignore")),
    ///     ExtensionKey::NoExtension
    /// );
    /// ```
    #[must_use]
    pub fn from_file_name(file_name: &OsStr) -> Self {
        match Path::new(file_name).extension() {
            Some(ext) if !ext.is_empty() => {
                Self::Named(format!(".{}", ext.to_string_lossy().to_lowercase()))
            }
            _ => Self::NoExtension,
        }
    }

    /// The key as text: the suffix, or [`Self::NO_EXTENSION_LABEL`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(ext) => ext,
            Self::NoExtension => Self::NO_EXTENSION_LABEL,
        }
    }
}

impl Display for ExtensionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad(self.as_str())
    }
}

/// Case-insensitive set of file name suffixes.
///
/// A file matches when its lowercased name ends with one of the suffixes, so
/// multi-part suffixes like `.tar.gz` work. Suffixes given without a leading
/// dot get one, which keeps `py` from matching `happy`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from user-supplied extensions.
    ///
    /// Blank entries are dropped and duplicates collapse.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();

        for ext in extensions {
            let ext = ext.as_ref().trim().to_lowercase();
            if ext.is_empty() {
                continue;
            }

            let suffix = if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            };

            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }

        Self { suffixes }
    }

    /// Whether a file with this name should be counted.
    #[must_use]
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.to_string_lossy().to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// The normalized suffixes, in the order first given.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// `true` when no suffix survived normalization; such a filter matches nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}
