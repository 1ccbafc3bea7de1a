use anyhow::anyhow;

/// Pixels between the viewport top and an activated section, leaving room for
/// the fixed header.
pub const DEFAULT_HEADER_OFFSET_PX: u32 = 80;

#[derive(Debug, Clone)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    active: bool,
}

impl NavEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    active: bool,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Where the page should scroll after an activation: the section top, aligned
/// just below the fixed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTarget {
    pub section_id: String,
    pub offset_px: u32,
}

/// Owns the parallel nav-entry and section sets and the single "active" slot.
#[derive(Debug)]
pub struct SectionRouter {
    entries: Vec<NavEntry>,
    sections: Vec<Section>,
    header_offset_px: u32,
}

impl SectionRouter {
    /// Every entry must name an existing section; a dangling entry id is a
    /// configuration error, reported here rather than silently skipped later.
    pub fn new(
        entries: Vec<NavEntry>,
        sections: Vec<Section>,
        header_offset_px: u32,
    ) -> anyhow::Result<Self> {
        if entries.is_empty() {
            anyhow::bail!("navigation needs at least one entry");
        }
        for entry in &entries {
            if !sections.iter().any(|s| s.id == entry.id) {
                anyhow::bail!(
                    "navigation entry {:?} has no matching section",
                    entry.id
                );
            }
        }
        Ok(Self {
            entries,
            sections,
            header_offset_px,
        })
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn first_entry_id(&self) -> &str {
        &self.entries[0].id
    }

    pub fn active_entry(&self) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.active)
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.active)
    }

    /// Moves the active slot to the entry/section pair matching `entry_id`.
    /// An unknown id is an error and leaves the current slot untouched.
    pub fn activate(&mut self, entry_id: &str) -> anyhow::Result<ScrollTarget> {
        if !self.entries.iter().any(|e| e.id == entry_id) {
            return Err(anyhow!("no navigation entry with id {:?}", entry_id));
        }

        for entry in &mut self.entries {
            entry.active = entry.id == entry_id;
        }
        for section in &mut self.sections {
            section.active = section.id == entry_id;
        }

        Ok(ScrollTarget {
            section_id: entry_id.to_string(),
            offset_px: self.header_offset_px,
        })
    }
}
