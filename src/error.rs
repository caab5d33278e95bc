use std::fmt;

/// Everything that can go wrong between building a relation and handing a
/// Hasse diagram to a renderer.
///
/// Witnesses are the offending elements themselves, in the order the scan
/// met them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError<E> {
    #[error("relation is not reflexive: {0:?} is not related to itself")]
    NotReflexive(E),

    #[error("relation is not antisymmetric: {0:?} and {1:?} are related both ways")]
    NotAntisymmetric(E, E),

    #[error("relation is not transitive: {0:?} -> {1:?} -> {2:?} but not {0:?} -> {2:?}")]
    NotTransitive(E, E, E),

    #[error("graph contains a cycle through {0:?}")]
    NotADag(E),

    #[error("no edge {0:?} -> {1:?}")]
    EdgeNotFound(E, E),

    #[error("{0:?} is not an element of the domain")]
    UnknownElement(E),
}

/// The discriminant of an [`OrderError`], without its witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotReflexive,
    NotAntisymmetric,
    NotTransitive,
    NotADag,
    EdgeNotFound,
    UnknownElement,
}

impl<E> OrderError<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotReflexive(..) => ErrorKind::NotReflexive,
            OrderError::NotAntisymmetric(..) => ErrorKind::NotAntisymmetric,
            OrderError::NotTransitive(..) => ErrorKind::NotTransitive,
            OrderError::NotADag(..) => ErrorKind::NotADag,
            OrderError::EdgeNotFound(..) => ErrorKind::EdgeNotFound,
            OrderError::UnknownElement(..) => ErrorKind::UnknownElement,
        }
    }

    /// True for the three partial-order law violations reported by validation.
    pub fn is_violation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NotReflexive | ErrorKind::NotAntisymmetric | ErrorKind::NotTransitive
        )
    }

    /// Maps the witness type, e.g. to turn borrowed witnesses into owned ones.
    pub fn map<F, T>(self, mut f: F) -> OrderError<T>
    where
        F: FnMut(E) -> T,
    {
        match self {
            OrderError::NotReflexive(x) => OrderError::NotReflexive(f(x)),
            OrderError::NotAntisymmetric(x, y) => OrderError::NotAntisymmetric(f(x), f(y)),
            OrderError::NotTransitive(x, y, z) => OrderError::NotTransitive(f(x), f(y), f(z)),
            OrderError::NotADag(x) => OrderError::NotADag(f(x)),
            OrderError::EdgeNotFound(x, y) => OrderError::EdgeNotFound(f(x), f(y)),
            OrderError::UnknownElement(x) => OrderError::UnknownElement(f(x)),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotReflexive => "not reflexive",
            ErrorKind::NotAntisymmetric => "not antisymmetric",
            ErrorKind::NotTransitive => "not transitive",
            ErrorKind::NotADag => "not a DAG",
            ErrorKind::EdgeNotFound => "edge not found",
            ErrorKind::UnknownElement => "unknown element",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_witness() {
        let e = OrderError::NotTransitive(1, 2, 4);
        assert_eq!(
            e.to_string(),
            "relation is not transitive: 1 -> 2 -> 4 but not 1 -> 4"
        );
        assert_eq!(e.kind(), ErrorKind::NotTransitive);
        assert!(e.is_violation());
    }

    #[test]
    fn map_preserves_kind() {
        let e: OrderError<&str> = OrderError::EdgeNotFound("a", "b");
        let owned = e.map(str::to_owned);
        assert_eq!(owned, OrderError::EdgeNotFound("a".to_owned(), "b".to_owned()));
        assert!(!owned.is_violation());
    }
}
