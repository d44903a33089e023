use std::io;
use std::path::Path;

use crate::imaging::domain::image_viewer::ImageViewer;

/// Opens images with the platform's default viewer.
pub struct SystemImageViewer;

impl SystemImageViewer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemImageViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageViewer for SystemImageViewer {
    fn show(&self, path: &Path) -> io::Result<()> {
        log::debug!("Opening {} in the system viewer", path.display());
        open::that(path)
    }
}
