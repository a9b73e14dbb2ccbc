//! Integration tests for the view controller.
//!
//! Tests cover:
//! - Initial state and the last-action-wins property
//! - "See More" / "Back to Home" transitions
//! - Scroll reset on every screen change
//! - Nav-bar links forcing a return home before the anchor applies

mod common;

use common::*;

#[test]
fn test_starts_on_home() {
    let controller = ViewController::new();
    assert_eq!(controller.current_view(), ViewState::Home);
    assert_eq!(ViewState::default(), ViewState::Home);
}

#[test]
fn test_last_navigation_wins() {
    let targets = [
        ViewState::UiUxGallery,
        ViewState::Home,
        ViewState::DevGallery,
        ViewState::DevGallery,
        ViewState::UiUxGallery,
        ViewState::Home,
        ViewState::DevGallery,
    ];

    // 1. After every prefix of the sequence the current view is the last target
    let mut controller = ViewController::new();
    for (i, target) in targets.iter().enumerate() {
        controller.navigate_to(*target);
        assert_eq!(
            controller.current_view(),
            *target,
            "view after step {} should be {:?}",
            i,
            target
        );
    }

    // 2. go_back counts as navigate_to(Home)
    controller.go_back();
    assert_eq!(controller.current_view(), ViewState::Home);
}

#[test]
fn test_gallery_back_then_other_gallery() {
    let mut controller = ViewController::new();
    controller.navigate_to(ViewState::UiUxGallery);
    controller.go_back();
    controller.navigate_to(ViewState::DevGallery);
    assert_eq!(controller.current_view(), ViewState::DevGallery);
}

#[test]
fn test_see_more_opens_matching_gallery() {
    let mut controller = ViewController::new();

    let transition = controller.see_more(Gallery::UiUx);
    assert_eq!(transition.from, ViewState::Home);
    assert_eq!(transition.to, ViewState::UiUxGallery);
    assert_eq!(controller.current_view(), ViewState::UiUxGallery);

    controller.go_back();
    controller.see_more(Gallery::Dev);
    assert_eq!(controller.current_view(), ViewState::DevGallery);
}

#[test]
fn test_entering_gallery_resets_scroll() {
    let mut controller = ViewController::new();

    for gallery in [Gallery::UiUx, Gallery::Dev] {
        let transition = controller.see_more(gallery);
        assert!(transition.reset_scroll, "{gallery:?} must open at the top");
        assert!(transition.changed_view());
        assert_eq!(transition.anchor, None);

        let back = controller.go_back();
        assert!(back.reset_scroll);
        assert_eq!(back.to, ViewState::Home);
    }
}

#[test]
fn test_nav_link_from_gallery_goes_home_first() {
    let mut controller = ViewController::new();
    controller.navigate_to(ViewState::DevGallery);

    // 1. Follow the "Skills" link while a gallery is showing
    let transition = controller.follow_link(Anchor::Skills);

    // 2. Same effect as go_back() followed by the anchor jump
    assert_eq!(controller.current_view(), ViewState::Home);
    assert_eq!(transition.from, ViewState::DevGallery);
    assert_eq!(transition.to, ViewState::Home);
    assert!(transition.reset_scroll);
    assert_eq!(transition.anchor, Some(Anchor::Skills));
}

#[test]
fn test_nav_link_on_home_only_jumps() {
    let mut controller = ViewController::new();

    let transition = controller.follow_link(Anchor::Contact);

    assert_eq!(controller.current_view(), ViewState::Home);
    assert!(!transition.changed_view());
    assert!(!transition.reset_scroll);
    assert_eq!(transition.anchor, Some(Anchor::Contact));
}

#[test]
fn test_gallery_view_mapping() {
    assert_eq!(Gallery::UiUx.view(), ViewState::UiUxGallery);
    assert_eq!(Gallery::Dev.view(), ViewState::DevGallery);
    assert_eq!(ViewState::UiUxGallery.gallery(), Some(Gallery::UiUx));
    assert_eq!(ViewState::DevGallery.gallery(), Some(Gallery::Dev));
    assert_eq!(ViewState::Home.gallery(), None);
}

#[test]
fn test_gallery_headings() {
    assert_eq!(Gallery::UiUx.featured_title(), "UI/UX Design");
    assert_eq!(Gallery::Dev.featured_title(), "Web Development");
    assert_eq!(Gallery::UiUx.title(), "All UI/UX Projects");
    assert_eq!(Gallery::Dev.title(), "All Engineering Projects");
}
