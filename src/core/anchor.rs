//! In-page anchors of the home screen and their scroll offsets.
//!
//! A desktop scrollable has no `#fragment` navigation, so the home screen
//! reports the height of every section as it is laid out and the offset of
//! an anchor is the running sum of the sections above it.

use std::collections::HashMap;

/// Named sections a link can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::About,
        Anchor::Skills,
        Anchor::Experience,
        Anchor::Projects,
        Anchor::Contact,
    ];

    /// Parses an `#about` style fragment. The leading `#` is optional.
    pub fn from_href(href: &str) -> Option<Self> {
        match href.trim().trim_start_matches('#').to_ascii_lowercase().as_str() {
            "about" => Some(Anchor::About),
            "skills" => Some(Anchor::Skills),
            "experience" => Some(Anchor::Experience),
            "projects" => Some(Anchor::Projects),
            "contact" => Some(Anchor::Contact),
            _ => None,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Anchor::About => "#about",
            Anchor::Skills => "#skills",
            Anchor::Experience => "#experience",
            Anchor::Projects => "#projects",
            Anchor::Contact => "#contact",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Anchor::About => Section::About,
            Anchor::Skills => Section::Skills,
            Anchor::Experience => Section::Experience,
            Anchor::Projects => Section::Projects,
            Anchor::Contact => Section::Contact,
        }
    }
}

/// Every section of the home screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    pub const ORDER: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Measured section heights plus the fixed spacing the home column uses.
#[derive(Debug, Clone, Default)]
pub struct AnchorMap {
    heights: HashMap<Section, f32>,
    spacing: f32,
    padding: f32,
}

impl AnchorMap {
    pub fn new(spacing: f32, padding: f32) -> Self {
        Self {
            heights: HashMap::new(),
            spacing,
            padding,
        }
    }

    /// Records the laid-out height of a section. Negative or non-finite
    /// sizes are treated as unmeasured.
    pub fn measure(&mut self, section: Section, height: f32) {
        if height.is_finite() && height >= 0.0 {
            self.heights.insert(section, height);
        } else {
            self.heights.remove(&section);
        }
    }

    pub fn height(&self, section: Section) -> f32 {
        self.heights.get(&section).copied().unwrap_or(0.0)
    }

    pub fn is_measured(&self, section: Section) -> bool {
        self.heights.contains_key(&section)
    }

    /// Vertical offset of the top edge of `anchor`'s section.
    pub fn offset(&self, anchor: Anchor) -> f32 {
        let target = anchor.section().index();
        let above: f32 = Section::ORDER[..target]
            .iter()
            .map(|section| self.height(*section))
            .sum();
        self.padding + above + self.spacing * target as f32
    }

    /// Forget all measurements, e.g. when the home screen is unmounted.
    pub fn clear(&mut self) {
        self.heights.clear();
    }
}
