use crate::config::Config;

/// Result of toggling a county
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    LimitReached,
}

impl ToggleOutcome {
    /// Whether the selection changed
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::LimitReached)
    }
}

/// Ordered, duplicate-free set of plotted counties, at most
/// `Config::SELECTION_LIMIT` long. Position decides line colour.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    counties: Vec<String>,
}

impl Selection {
    /// Builds a selection, dropping repeats and anything past the limit.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counties: Vec<String> = Vec::with_capacity(Config::SELECTION_LIMIT);
        for name in names {
            if counties.len() == Config::SELECTION_LIMIT {
                break;
            }
            if !counties.contains(&name) {
                counties.push(name);
            }
        }
        Self { counties }
    }

    pub fn defaults() -> Self {
        Self::from_names(Config::DEFAULT_COUNTIES.iter().map(|c| (*c).to_string()))
    }

    pub fn contains(&self, county: &str) -> bool {
        self.counties.iter().any(|c| c == county)
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.counties.len() >= Config::SELECTION_LIMIT
    }

    pub fn as_slice(&self) -> &[String] {
        &self.counties
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.counties.iter().map(String::as_str)
    }

    /// Removes a selected county, or appends an unselected one if there
    /// is room.
    pub fn toggle(&mut self, county: &str) -> ToggleOutcome {
        if let Some(index) = self.counties.iter().position(|c| c == county) {
            self.counties.remove(index);
            ToggleOutcome::Removed
        } else if self.is_full() {
            ToggleOutcome::LimitReached
        } else {
            self.counties.push(county.to_string());
            ToggleOutcome::Added
        }
    }
}
