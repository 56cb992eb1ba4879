use std::collections::HashSet;

/// Regions excluded from the geodemographic distribution view
///
/// These are selectable on the map but have no comparable geodemographic
/// classification, so the distribution call site drops them. Call-site
/// policy, not a filter invariant; callers may pass a different set.
pub const GEODEMOGRAPHIC_EXCLUSIONS: [&str; 3] = ["Ireland", "Isle of Man", "Channel Islands"];

/// Set of currently active region names
///
/// Invariant: a name is present in the set if and only if that region is
/// active (highlighted on the map and included in filtering). All regions
/// start active; user toggles flip membership one region at a time.
#[derive(Debug, Clone, Default)]
pub struct RegionSelection {
    active: HashSet<String>,
}

impl RegionSelection {
    /// Creates a selection with every given region active
    ///
    /// Duplicate names collapse to one entry.
    pub fn all_active<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RegionSelection {
            active: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Flips a region between active and inactive
    ///
    /// Toggling twice restores the original selection.
    ///
    /// # Returns
    ///
    /// `true` if the region is active after the toggle
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.active.remove(name) {
            false
        } else {
            self.active.insert(name.to_string());
            true
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    /// The full current active set
    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn active(&self) -> &HashSet<String> {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[allow(dead_code)] // Part of public API, may be used by external code
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
