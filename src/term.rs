use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A stable, cheaply-cloneable handle to an interned term.
///
/// Cloning a `Term` is a pointer copy plus an atomic refcount bump, not a
/// byte copy: indices and query structures hold owned `Term`s rather than
/// `&str` views borrowed from the interner, which sidesteps the lifetime
/// entanglement a borrowed view would create against a `RwLock`-guarded
/// engine. Two terms interned from equal byte sequences compare equal and
/// point at the same heap allocation. Ordering and equality are byte-wise,
/// inherited from `str`.
#[derive(Clone, Eq)]
pub struct Term(Arc<str>);

impl Term {
    /// Builds a `Term` directly, without going through a
    /// [`StringInterner`]. Safe to use for transient, query-side terms:
    /// equality and hashing are by content, so a term built this way
    /// compares equal to (and hashes the same as) an interner-owned term
    /// with the same bytes, even though the two don't alias storage.
    pub fn new(word: &str) -> Self {
        Term(Arc::from(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl std::hash::Hash for Term {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state);
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.as_ref().cmp(other.0.as_ref())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Term({:?})", self.0.as_ref())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.as_ref())
    }
}

/// Owns the canonical byte storage of every distinct term ever seen by an
/// engine. Storage is append-only; interning the same bytes twice returns
/// `Term`s that alias the same allocation.
#[derive(Default)]
pub struct StringInterner {
    terms: HashMap<Box<str>, Term>,
}

impl StringInterner {
    pub fn new() -> Self {
        StringInterner {
            terms: HashMap::new(),
        }
    }

    pub fn intern(&mut self, word: &str) -> Term {
        if let Some(term) = self.terms.get(word) {
            return term.clone();
        }
        let term = Term(Arc::from(word));
        self.terms.insert(word.into(), term.clone());
        term
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
