//! Error paths and object field keys.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// FIELD KEY
// ============================================================================

/// Canonical name of an object field.
///
/// Keys are normalized to their string form when a schema is built, and
/// input objects are always queried with that same string, so a field has
/// exactly one spelling on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    /// Creates a key from anything string-like.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&String> for FieldKey {
    fn from(key: &String) -> Self {
        Self(key.clone())
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// An object field.
    Key(String),
    /// An array position.
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<&FieldKey> for PathSegment {
    fn from(key: &FieldKey) -> Self {
        PathSegment::Key(key.as_str().to_owned())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

// ============================================================================
// FIELD PATH
// ============================================================================

/// Route from the validated root value to the value an error is about.
///
/// The empty path denotes the root itself.
///
/// # Examples
///
/// ```
/// use input_validator::foundation::FieldPath;
///
/// let path = FieldPath::from_iter(["users".into(), 1usize.into(), "name".into()]);
/// assert_eq!(path.to_string(), "users.1.name");
/// assert_eq!(path.to_pointer(), "/users/1/name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FieldPath(SmallVec<[PathSegment; 4]>);

impl FieldPath {
    /// The empty path.
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns this path with `segment` in front.
    #[must_use = "prepend returns a new path"]
    pub fn prepend(mut self, segment: impl Into<PathSegment>) -> Self {
        self.0.insert(0, segment.into());
        self
    }

    /// Renders the path as an RFC 6901 JSON pointer.
    #[must_use]
    pub fn to_pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.0 {
            pointer.push('/');
            match segment {
                PathSegment::Key(key) => {
                    pointer.push_str(&key.replace('~', "~0").replace('/', "~1"));
                }
                PathSegment::Index(index) => pointer.push_str(&index.to_string()),
            }
        }
        pointer
    }
}

impl FromIterator<PathSegment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Builds a [`FieldPath`] from keys and indices.
///
/// ```
/// use input_validator::path;
///
/// let p = path!["users", 1usize, "profile", "name"];
/// assert_eq!(p.to_string(), "users.1.profile.name");
/// ```
#[macro_export]
macro_rules! path {
    () => { $crate::foundation::FieldPath::root() };
    ($($segment:expr),+ $(,)?) => {
        <$crate::foundation::FieldPath as ::std::iter::FromIterator<_>>::from_iter([
            $($crate::foundation::PathSegment::from($segment)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_builds_bottom_up() {
        let path = FieldPath::root()
            .prepend("name")
            .prepend("profile")
            .prepend(1usize)
            .prepend("users");
        assert_eq!(path.to_string(), "users.1.profile.name");
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_pointer_escapes_reserved_characters() {
        let path = FieldPath::root().prepend("a/b~c");
        assert_eq!(path.to_pointer(), "/a~1b~0c");
    }

    #[test]
    fn test_root_renders_empty() {
        assert!(FieldPath::root().is_root());
        assert_eq!(FieldPath::root().to_string(), "");
        assert_eq!(FieldPath::root().to_pointer(), "");
    }

    #[test]
    fn test_serializes_as_mixed_array() {
        let path = FieldPath::root().prepend(0usize).prepend("tags");
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            serde_json::json!(["tags", 0])
        );
    }
}
