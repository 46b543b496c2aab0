use crate::model::word::WordPair;

/// Working set of word pairs that are not learned yet.
///
/// Keys (`WordPair::front`) are unique. First-insertion order is kept so the
/// leftovers are written back in the order they were read; selection itself is
/// random and does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pairs: Vec<WordPair>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a deck, later duplicates replacing earlier values.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = WordPair>) -> Self {
        let mut deck = Self::new();
        for pair in pairs {
            deck.insert(pair);
        }
        deck
    }

    /// Inserts a pair. If the key already exists its value is replaced in place
    /// and the previous pair is returned.
    pub fn insert(&mut self, pair: WordPair) -> Option<WordPair> {
        match self.position(pair.front()) {
            Some(idx) => Some(std::mem::replace(&mut self.pairs[idx], pair)),
            None => {
                self.pairs.push(pair);
                None
            }
        }
    }

    /// Removes the pair with the given key, keeping the order of the rest.
    pub fn remove(&mut self, front: &str) -> Option<WordPair> {
        self.position(front).map(|idx| self.pairs.remove(idx))
    }

    #[must_use]
    pub fn get(&self, front: &str) -> Option<&WordPair> {
        self.position(front).map(|idx| &self.pairs[idx])
    }

    #[must_use]
    pub fn contains(&self, front: &str) -> bool {
        self.position(front).is_some()
    }

    /// Pair at `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&WordPair> {
        self.pairs.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordPair> {
        self.pairs.iter()
    }

    fn position(&self, front: &str) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.front() == front)
    }
}

impl FromIterator<WordPair> for Deck {
    fn from_iter<T: IntoIterator<Item = WordPair>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
