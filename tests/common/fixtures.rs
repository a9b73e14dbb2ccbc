#![allow(dead_code)]

use std::io::Write;
use std::time::{Duration, Instant};

use folio::core::BlockId;
use image::{ImageBuffer, Rgb};
use tempfile::NamedTempFile;

/// Creates a 100x100 red test image and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Writes `contents` to a temp file with the given suffix.
pub fn write_temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// A small but complete catalog.
pub const MINIMAL_CATALOG: &str = r##"
[profile]
greeting = "Hi, I'm"
first_name = "Ada"
last_name = "Lovelace."
tagline = "Analytical engines."
journey = "Notes on the engine."
credit = "Ada Lovelace."

[profile.education]
title = "Private tutoring"
field = "Mathematics"

[profile.current_role]
title = "Analyst"
company = "Babbage & Co"

[profile.contact]
heading = "Write to me."
email = "ada@example.com"
linkedin_name = "Ada"
linkedin_url = "https://example.com/ada"

[[navLinks]]
title = "About"
href = "#about"

[[uiUxProjects]]
title = "Punch Cards"
tags = ["Jacquard"]
media = { icon = "layout" }
accent = "pink"

[[devProjects]]
title = "Bernoulli Numbers"
description = "The first published program."
tags = ["Engine", "Notes"]
media = { image = "images/note-g.png" }
"##;

pub fn block(id: &str) -> BlockId {
    BlockId::new(id)
}

/// `start` moved forward by `millis`.
pub fn later(start: Instant, millis: u64) -> Instant {
    start + Duration::from_millis(millis)
}
