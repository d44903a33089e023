use std::io;
use std::path::Path;

/// Shows a written image to the user.
pub trait ImageViewer: Send {
    fn show(&self, path: &Path) -> io::Result<()>;
}
