//! Integration tests for image loading.

mod common;

use std::path::Path;

use common::*;
use folio::core::media;

#[test]
fn test_decode_png() -> anyhow::Result<()> {
    let file = create_test_image();

    let image = media::decode(file.path())?;

    assert_eq!((image.width, image.height), (100, 100));
    assert_eq!(image.pixels.len(), 100 * 100 * 4);
    assert_eq!(&image.pixels[..4], &[255, 0, 0, 255]);
    Ok(())
}

#[tokio::test]
async fn test_load_off_thread() -> anyhow::Result<()> {
    let file = create_test_image();
    let dir = file.path().parent().unwrap().to_path_buf();
    let name = file.path().file_name().unwrap().to_string_lossy().into_owned();

    // Same shape the window uses: blocking decode on the blocking pool
    let image = tokio::task::spawn_blocking(move || media::load(&name, &dir)).await??;

    assert_eq!(image.width, 100);
    Ok(())
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(media::load("images/missing.png", dir.path()).is_err());
}

#[test]
fn test_garbage_fails_to_decode() {
    let file = write_temp_file(".png", "definitely not a png");
    assert!(media::decode(file.path()).is_err());
}

#[test]
fn test_remote_references_are_not_fetched() {
    assert!(media::is_remote("https://images.example.com/a.jpg"));
    assert!(media::is_remote("http://example.com/a.jpg"));
    assert!(!media::is_remote("images/a.jpg"));

    let err = media::resolve("https://images.example.com/a.jpg", Path::new("assets"));
    assert!(err.is_err());
}

#[test]
fn test_resolve() -> anyhow::Result<()> {
    let assets = Path::new("assets");
    assert_eq!(
        media::resolve("images/a.jpg", assets)?,
        Path::new("assets/images/a.jpg")
    );

    let dir = tempfile::tempdir()?;
    let absolute = dir.path().join("b.png");
    let reference = absolute.to_string_lossy().into_owned();
    assert_eq!(media::resolve(&reference, assets)?, absolute);
    Ok(())
}
