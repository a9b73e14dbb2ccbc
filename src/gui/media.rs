use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::Task;
use iced::widget::image;
use tracing::warn;

use crate::core::media;
use crate::gui::Message;

#[derive(Debug, Clone)]
pub enum MediaSlot {
    Loading,
    Ready(image::Handle),
    Broken,
}

/// Decoded catalog images, keyed by their catalog reference.
#[derive(Debug, Default)]
pub struct MediaStore {
    slots: HashMap<String, MediaSlot>,
}

impl MediaStore {
    /// Starts loading every reference not seen before.
    pub fn request<'a>(
        &mut self,
        references: impl IntoIterator<Item = &'a str>,
        assets_dir: &Path,
    ) -> Task<Message> {
        let mut tasks = Vec::new();
        for reference in references {
            if self.slots.contains_key(reference) {
                continue;
            }
            self.slots.insert(reference.to_string(), MediaSlot::Loading);
            tasks.push(load(reference.to_string(), assets_dir.to_path_buf()));
        }
        Task::batch(tasks)
    }

    pub fn finish(&mut self, reference: String, result: Result<image::Handle, String>) {
        let slot = match result {
            Ok(handle) => MediaSlot::Ready(handle),
            Err(error) => {
                warn!(%reference, %error, "media unavailable, using placeholder");
                MediaSlot::Broken
            }
        };
        self.slots.insert(reference, slot);
    }

    pub fn get(&self, reference: &str) -> MediaSlot {
        self.slots
            .get(reference)
            .cloned()
            .unwrap_or(MediaSlot::Broken)
    }
}

fn load(reference: String, assets_dir: PathBuf) -> Task<Message> {
    let key = reference.clone();
    Task::perform(
        async move {
            match tokio::task::spawn_blocking(move || media::load(&reference, &assets_dir)).await {
                Ok(Ok(decoded)) => Ok(image::Handle::from_rgba(
                    decoded.width,
                    decoded.height,
                    decoded.pixels,
                )),
                Ok(Err(error)) => Err(format!("{error:#}")),
                Err(error) => Err(error.to_string()),
            }
        },
        move |result| Message::MediaLoaded {
            reference: key,
            result,
        },
    )
}
