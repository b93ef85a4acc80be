use crate::domain::cache_tags::CacheTagSet;

/// A query result together with the cache tags describing what it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub value: T,
    pub tags: CacheTagSet,
}

impl<T> Tagged<T> {
    pub fn new(value: T, tags: CacheTagSet) -> Self {
        Self { value, tags }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tagged<U> {
        Tagged {
            value: f(self.value),
            tags: self.tags,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
