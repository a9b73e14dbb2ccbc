//! Integration tests for the content catalog.
//!
//! Tests cover:
//! - The built-in catalog parses and its nav links resolve
//! - Loading a catalog from disk
//! - Validation of navigation links and unknown keys
//! - Image reference collection

mod common;

use common::*;
use folio::core::{Accent, IconId, MediaRef};

#[test]
fn test_builtin_catalog_parses() -> anyhow::Result<()> {
    let catalog = ContentCatalog::builtin()?;

    assert_eq!(catalog.items(Category::NavLinks).len(), 4);
    assert_eq!(catalog.items(Category::Skills).len(), 16);
    assert_eq!(catalog.items(Category::FeaturedUiUx).len(), 2);
    assert_eq!(catalog.items(Category::FeaturedDev).len(), 2);
    assert_eq!(catalog.items(Category::UiUxProjects).len(), 3);
    assert_eq!(catalog.items(Category::DevProjects).len(), 3);
    assert_eq!(catalog.items(Category::Certifications).len(), 4);

    assert_eq!(catalog.profile().first_name, "Sakith");
    Ok(())
}

#[test]
fn test_builtin_nav_links_resolve() -> anyhow::Result<()> {
    let catalog = ContentCatalog::builtin()?;

    let anchors: Vec<Anchor> = catalog
        .items(Category::NavLinks)
        .iter()
        .filter_map(ContentItem::anchor)
        .collect();

    assert_eq!(
        anchors,
        vec![Anchor::About, Anchor::Skills, Anchor::Experience, Anchor::Projects]
    );
    Ok(())
}

#[test]
fn test_builtin_items_have_titles() -> anyhow::Result<()> {
    let catalog = ContentCatalog::builtin()?;
    for category in Category::ALL {
        for item in catalog.items(category) {
            assert!(
                !item.title.trim().is_empty(),
                "empty title in {}",
                category.key()
            );
        }
    }
    Ok(())
}

#[test]
fn test_minimal_catalog() -> anyhow::Result<()> {
    let catalog = ContentCatalog::from_toml_str(MINIMAL_CATALOG)?;

    // 1. Profile
    let profile = catalog.profile();
    assert_eq!(profile.full_name(), "Ada Lovelace.");
    assert!(profile.roles.is_empty());
    assert_eq!(profile.photo, None);

    // 2. Items keep their order and attributes
    let ui = &catalog.items(Category::UiUxProjects)[0];
    assert_eq!(ui.title, "Punch Cards");
    assert_eq!(ui.icon(), Some(IconId::Layout));
    assert_eq!(ui.accent, Accent::Pink);
    assert_eq!(ui.description, None);

    let dev = &catalog.items(Category::DevProjects)[0];
    assert_eq!(dev.tags, vec!["Engine".to_string(), "Notes".to_string()]);
    assert_eq!(
        dev.media,
        Some(MediaRef::Image("images/note-g.png".to_string()))
    );
    assert_eq!(dev.accent, Accent::Blue);

    // 3. Missing lists are empty, not errors
    assert!(catalog.items(Category::Skills).is_empty());
    assert!(catalog.items(Category::Certifications).is_empty());
    Ok(())
}

#[test]
fn test_unknown_anchor_is_rejected() {
    let source = MINIMAL_CATALOG.replace("href = \"#about\"", "href = \"#blog\"");
    let err = ContentCatalog::from_toml_str(&source).unwrap_err();
    assert!(err.to_string().contains("#blog"), "unexpected error: {err}");
}

#[test]
fn test_nav_link_without_href_is_rejected() {
    let source = MINIMAL_CATALOG.replace("href = \"#about\"\n", "");
    assert!(ContentCatalog::from_toml_str(&source).is_err());
}

#[test]
fn test_unknown_item_key_is_rejected() {
    let source = MINIMAL_CATALOG.replace("accent = \"pink\"", "accent = \"pink\"\nprice = 3");
    assert!(ContentCatalog::from_toml_str(&source).is_err());
}

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let file = write_temp_file(".toml", MINIMAL_CATALOG);

    let catalog = ContentCatalog::load(file.path())?;

    assert_eq!(catalog.items(Category::NavLinks).len(), 1);
    Ok(())
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ContentCatalog::load(&dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_image_refs_are_deduplicated() -> anyhow::Result<()> {
    let source = format!(
        "{MINIMAL_CATALOG}
[[featuredDev]]
title = \"Bernoulli Numbers\"
media = {{ image = \"images/note-g.png\" }}

[[certifications]]
title = \"Royal Society\"
media = {{ image = \"images/seal.png\" }}
"
    );
    let source = source.replace("credit = ", "photo = \"portrait.png\"\ncredit = ");
    let catalog = ContentCatalog::from_toml_str(&source)?;

    assert_eq!(
        catalog.image_refs(),
        vec!["portrait.png", "images/note-g.png", "images/seal.png"]
    );
    Ok(())
}

#[test]
fn test_contact_links() -> anyhow::Result<()> {
    let catalog = ContentCatalog::from_toml_str(MINIMAL_CATALOG)?;
    let contact = &catalog.profile().contact;

    assert_eq!(contact.mailto(), "mailto:ada@example.com");
    assert_eq!(contact.linkedin_url, "https://example.com/ada");

    let builtin = ContentCatalog::builtin()?;
    let contact = &builtin.profile().contact;
    assert!(contact.mailto().starts_with("mailto:"));
    assert!(contact.linkedin_url.starts_with("https://"));
    Ok(())
}

#[test]
fn test_display_name_drops_trailing_period() -> anyhow::Result<()> {
    let catalog = ContentCatalog::from_toml_str(MINIMAL_CATALOG)?;
    assert_eq!(catalog.profile().full_name(), "Ada Lovelace.");
    assert_eq!(catalog.profile().display_name(), "Ada Lovelace");

    let builtin = ContentCatalog::builtin()?;
    assert_eq!(builtin.profile().display_name(), "Sakith Nizar");
    Ok(())
}
