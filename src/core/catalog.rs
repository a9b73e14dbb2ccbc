//! Static content shown by the portfolio: projects, skills, certifications,
//! navigation links and the owner's profile.
//!
//! The built-in catalog is embedded from `assets/catalog.toml`. A catalog
//! with the same shape can be loaded from disk to present someone else's
//! portfolio without rebuilding.

use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::core::anchor::Anchor;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Keys of the catalog's item lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    UiUxProjects,
    DevProjects,
    Skills,
    Certifications,
    NavLinks,
    FeaturedUiUx,
    FeaturedDev,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::UiUxProjects,
        Category::DevProjects,
        Category::Skills,
        Category::Certifications,
        Category::NavLinks,
        Category::FeaturedUiUx,
        Category::FeaturedDev,
    ];

    /// Key used in the catalog file.
    pub fn key(self) -> &'static str {
        match self {
            Category::UiUxProjects => "uiUxProjects",
            Category::DevProjects => "devProjects",
            Category::Skills => "skills",
            Category::Certifications => "certifications",
            Category::NavLinks => "navLinks",
            Category::FeaturedUiUx => "featuredUiUx",
            Category::FeaturedDev => "featuredDev",
        }
    }
}

/// Semantic colour token. The renderer maps it to an actual colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    Blue,
    Pink,
    Purple,
    Violet,
    Green,
    Red,
    Orange,
    Yellow,
    Slate,
    White,
}

impl Accent {
    /// sRGB triple of the accent's light shade.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Accent::Blue => (96, 165, 250),
            Accent::Pink => (244, 114, 182),
            Accent::Purple => (192, 132, 252),
            Accent::Violet => (167, 139, 250),
            Accent::Green => (74, 222, 128),
            Accent::Red => (248, 113, 113),
            Accent::Orange => (251, 146, 60),
            Accent::Yellow => (250, 204, 21),
            Accent::Slate => (148, 163, 184),
            Accent::White => (255, 255, 255),
        }
    }
}

/// Icon identifiers used across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Code,
    Layout,
    Bug,
    Github,
    Linkedin,
    Mail,
    ChevronDown,
    Send,
    Cpu,
    Database,
    Globe,
    Server,
    Figma,
    CheckCircle,
    Terminal,
    Palette,
    Smartphone,
    ArrowLeft,
    ArrowRight,
    Upload,
    CreditCard,
    GitBranch,
    Lock,
    Cloud,
    Gem,
    PenTool,
    Award,
}

impl IconId {
    /// A text glyph that stands in for the icon with the default font.
    pub fn glyph(self) -> &'static str {
        match self {
            IconId::Code => "</>",
            IconId::Layout => "▦",
            IconId::Bug => "🐞",
            IconId::Github => "⌥",
            IconId::Linkedin => "in",
            IconId::Mail => "✉",
            IconId::ChevronDown => "⌄",
            IconId::Send => "➤",
            IconId::Cpu => "▣",
            IconId::Database => "⛁",
            IconId::Globe => "◍",
            IconId::Server => "▤",
            IconId::Figma => "◈",
            IconId::CheckCircle => "✔",
            IconId::Terminal => ">_",
            IconId::Palette => "◐",
            IconId::Smartphone => "▯",
            IconId::ArrowLeft => "←",
            IconId::ArrowRight => "→",
            IconId::Upload => "⇪",
            IconId::CreditCard => "▭",
            IconId::GitBranch => "⑂",
            IconId::Lock => "⚿",
            IconId::Cloud => "☁",
            IconId::Gem => "◆",
            IconId::PenTool => "✒",
            IconId::Award => "★",
        }
    }
}

/// Where an item's picture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaRef {
    Icon(IconId),
    /// Path relative to the assets directory, or an absolute path.
    Image(String),
}

/// One displayed unit: a project card, a certification, a skill badge or
/// a navigation link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: Option<MediaRef>,
    #[serde(default)]
    pub accent: Accent,
    /// In-page anchor (`#about`) for navigation links.
    #[serde(default)]
    pub href: Option<String>,
}

impl ContentItem {
    pub fn anchor(&self) -> Option<Anchor> {
        self.href.as_deref().and_then(Anchor::from_href)
    }

    pub fn image(&self) -> Option<&str> {
        match &self.media {
            Some(MediaRef::Image(path)) => Some(path),
            _ => None,
        }
    }

    pub fn icon(&self) -> Option<IconId> {
        match &self.media {
            Some(MediaRef::Icon(icon)) => Some(*icon),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub title: String,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactDetails {
    pub heading: String,
    pub email: String,
    pub linkedin_name: String,
    pub linkedin_url: String,
}

impl ContactDetails {
    /// Link that opens a new mail to [`ContactDetails::email`].
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

/// Who the portfolio is about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub greeting: String,
    pub first_name: String,
    pub last_name: String,
    /// Role badges under the name. Items use `title`, `media` and `accent`.
    #[serde(default)]
    pub roles: Vec<ContentItem>,
    pub tagline: String,
    pub journey: String,
    pub education: Education,
    pub current_role: Position,
    #[serde(default)]
    pub competencies: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Position>,
    pub contact: ContactDetails,
    #[serde(default)]
    pub photo: Option<String>,
    pub credit: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The name without the stylistic trailing period of the hero heading,
    /// for window titles and other plain-text places.
    pub fn display_name(&self) -> String {
        let last = self.last_name.trim().trim_end_matches('.');
        format!("{} {}", self.first_name.trim(), last)
            .trim()
            .to_string()
    }
}

/// Read-only display data for the whole session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentCatalog {
    profile: Profile,
    #[serde(default)]
    nav_links: Vec<ContentItem>,
    #[serde(default)]
    skills: Vec<ContentItem>,
    #[serde(default)]
    featured_ui_ux: Vec<ContentItem>,
    #[serde(default)]
    featured_dev: Vec<ContentItem>,
    #[serde(default)]
    ui_ux_projects: Vec<ContentItem>,
    #[serde(default)]
    dev_projects: Vec<ContentItem>,
    #[serde(default)]
    certifications: Vec<ContentItem>,
}

impl ContentCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG).context("built-in catalog is invalid")
    }

    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let catalog: Self = toml::from_str(source).context("failed to parse catalog")?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in catalog {}", path.display()))
    }

    /// Every navigation link must point at a known in-page anchor.
    pub fn validate(&self) -> anyhow::Result<()> {
        for link in &self.nav_links {
            match link.href.as_deref() {
                None => bail!("navigation link `{}` has no href", link.title),
                Some(href) if Anchor::from_href(href).is_none() => {
                    bail!("navigation link `{}` points at unknown anchor `{href}`", link.title)
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    pub fn items(&self, category: Category) -> &[ContentItem] {
        match category {
            Category::UiUxProjects => &self.ui_ux_projects,
            Category::DevProjects => &self.dev_projects,
            Category::Skills => &self.skills,
            Category::Certifications => &self.certifications,
            Category::NavLinks => &self.nav_links,
            Category::FeaturedUiUx => &self.featured_ui_ux,
            Category::FeaturedDev => &self.featured_dev,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Image references across the catalog, in display order, deduplicated.
    pub fn image_refs(&self) -> Vec<&str> {
        let mut refs: Vec<&str> = Vec::new();
        let photo = self.profile.photo.as_deref();
        let items = Category::ALL
            .iter()
            .flat_map(|category| self.items(*category))
            .filter_map(ContentItem::image);
        for reference in photo.into_iter().chain(items) {
            if !refs.contains(&reference) {
                refs.push(reference);
            }
        }
        refs
    }
}
