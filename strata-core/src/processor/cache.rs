use rustc_hash::FxHashMap;

/// Memoized strings keyed by packed placement origin.
///
/// Once more than `capacity` origins are held, the next lookup clears everything.
#[derive(Debug, Clone)]
pub struct OriginCache {
    name: &'static str,
    capacity: usize,
    entries: FxHashMap<i64, String>,
}

impl OriginCache {
    /// An empty cache. `name` only shows up in logs.
    #[must_use]
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            entries: FxHashMap::default(),
        }
    }

    /// Returns the value for `origin`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, origin: i64, resolve: F) -> &str
    where
        F: FnOnce() -> String,
    {
        if self.entries.len() > self.capacity {
            log::debug!(
                "clearing {} cache after {} origins",
                self.name,
                self.entries.len()
            );
            self.entries.clear();
        }
        self.entries.entry(origin).or_insert_with(resolve)
    }

    #[cfg(test)]
    fn get(&self, origin: i64) -> Option<&str> {
        self.entries.get(&origin).map(String::as_str)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The rock, soil and wood caches of one worker.
///
/// Not shared: every concurrent worker owns its own instance.
#[derive(Debug, Clone)]
pub struct ProcessorCache {
    /// Rock material per origin.
    pub rock: OriginCache,
    /// Soil material per origin.
    pub soil: OriginCache,
    /// Palette wood hint per origin.
    pub wood: OriginCache,
}

impl ProcessorCache {
    /// Three empty caches with the same capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            rock: OriginCache::new("rock", capacity),
            soil: OriginCache::new("soil", capacity),
            wood: OriginCache::new("wood", capacity),
        }
    }
}
