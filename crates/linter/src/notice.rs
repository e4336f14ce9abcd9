use indexmap::IndexSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// What kind of deprecated usage a notice reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// A deprecated field selected directly on a root operation type.
    RootField { root: String, field: String },
    /// A deprecated field on any other type.
    Field { parent: String, field: String },
    /// A deprecated argument; `owner` is the enclosing field (or type).
    Argument { argument: String, owner: String },
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootField { root, field } => write!(f, "{root} \"{field}\" is deprecated"),
            Self::Field { parent, field } => write!(f, "Field \"{parent}.{field}\" is deprecated"),
            Self::Argument { argument, owner } => {
                write!(f, "Argument \"{argument}\" from \"{owner}\" is deprecated")
            }
        }
    }
}

/// One deprecated-usage site.
///
/// Two notices are the same when they have the same kind and file; the reason
/// is informational only. With file reporting off `file` is `None`, so the same
/// usage in different files collapses into one notice.
#[derive(Debug, Clone)]
pub struct DeprecationNotice {
    pub kind: NoticeKind,
    pub file: Option<PathBuf>,
    pub reason: String,
}

impl DeprecationNotice {
    #[must_use]
    pub fn new(kind: NoticeKind, file: Option<&Path>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            file: file.map(Path::to_path_buf),
            reason: reason.into(),
        }
    }
}

impl PartialEq for DeprecationNotice {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.file == other.file
    }
}

impl Eq for DeprecationNotice {}

impl Hash for DeprecationNotice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.file.hash(state);
    }
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(file) = &self.file {
            write!(f, " in {}", file.display())?;
        }
        Ok(())
    }
}

/// Deduplicated notices in the order they were first found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSet {
    notices: IndexSet<DeprecationNotice>,
}

impl NoticeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice. Returns `false` if an equal notice was already present,
    /// in which case the first one is kept.
    pub fn insert(&mut self, notice: DeprecationNotice) -> bool {
        self.notices.insert(notice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeprecationNotice> {
        self.notices.iter()
    }
}

impl Extend<DeprecationNotice> for NoticeSet {
    fn extend<T: IntoIterator<Item = DeprecationNotice>>(&mut self, iter: T) {
        self.notices.extend(iter);
    }
}

impl IntoIterator for NoticeSet {
    type Item = DeprecationNotice;
    type IntoIter = indexmap::set::IntoIter<DeprecationNotice>;

    fn into_iter(self) -> Self::IntoIter {
        self.notices.into_iter()
    }
}

impl<'a> IntoIterator for &'a NoticeSet {
    type Item = &'a DeprecationNotice;
    type IntoIter = indexmap::set::Iter<'a, DeprecationNotice>;

    fn into_iter(self) -> Self::IntoIter {
        self.notices.iter()
    }
}
