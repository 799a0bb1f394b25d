// Copyright 2024 the glue-model authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The core error returned by the model crates.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

impl Error {
    /// Creates a new [Error] with the given [ErrorKind] and source error.
    pub fn new<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Error {
            kind,
            source: source.into(),
        }
    }

    /// A helper to create a new [ErrorKind::Serde] error.
    pub fn serde<T: Into<BoxError>>(source: T) -> Self {
        Error::new(ErrorKind::Serde, source)
    }

    /// A helper to create a new [ErrorKind::InvalidArgument] error.
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Error::new(ErrorKind::InvalidArgument, source)
    }

    /// A helper to create a new [ErrorKind::Other] error.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Error::new(ErrorKind::Other, source)
    }

    /// Returns the [ErrorKind] associated with this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind.clone()
    }

    /// Recurses through the source error chain and returns some reference to
    /// the inner value if it is of type `T`, or `None` if it isn't found.
    pub fn as_inner<T: std::error::Error + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut error = self.source.as_ref() as &(dyn std::error::Error);
        loop {
            match error.downcast_ref::<T>() {
                Some(e) => return Some(e),
                None => error = error.source()?,
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A serialization or deserialization error.
    Serde,
    /// A caller supplied an argument the model cannot accept, e.g. a
    /// duplicate key for a map-typed field.
    InvalidArgument,
    /// An uncategorized error.
    #[default]
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Serde => write!(
                f,
                "a problem occurred during serialization or deserialization"
            ),
            ErrorKind::InvalidArgument => write!(f, "an argument was invalid"),
            ErrorKind::Other => write!(f, "a problem occurred"),
        }
    }
}

/// Local misuse of a model builder, reported synchronously.
///
/// These are the only conditions the value objects themselves validate;
/// everything else is the service's job.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum FieldViolation {
    /// Map-typed fields are additive-only within one population pass: the
    /// single-entry insert never overwrites an existing key.
    #[error("duplicate key `{key}` for map field `{field}`")]
    DuplicateKey {
        /// The wire name of the map field.
        field: &'static str,
        /// The rejected key.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_source() {
        let err = Error::invalid_argument(FieldViolation::DuplicateKey {
            field: "Arguments",
            key: "--conf".to_string(),
        });
        let msg = format!("{err}");
        assert!(msg.contains("an argument was invalid"), "{msg}");
        assert!(msg.contains("--conf"), "{msg}");
    }

    #[test]
    fn downcast() {
        let err = Error::invalid_argument(FieldViolation::DuplicateKey {
            field: "Tags",
            key: "team".to_string(),
        });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let inner = err.as_inner::<FieldViolation>().unwrap();
        match inner {
            FieldViolation::DuplicateKey { field, key } => {
                assert_eq!(*field, "Tags");
                assert_eq!(key, "team");
            }
        }
    }

    #[derive(Debug, Default)]
    struct LeafError {}

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf error")
        }
    }

    impl std::error::Error for LeafError {}

    #[test]
    fn downcast_miss_returns_none() {
        let err = Error::other(LeafError::default());
        assert!(err.as_inner::<FieldViolation>().is_none());
        assert!(err.as_inner::<LeafError>().is_some());
    }
}
