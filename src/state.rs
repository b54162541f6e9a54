use std::path::PathBuf;

use eframe::egui::ColorImage;

use crate::chart::figure::Figure;
use crate::color::Shades;
use crate::ui::output;

/// Frames painted before the screenshot is taken, so fonts and layout settle.
const SETTLE_FRAMES: u32 = 2;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Progress of writing the figure to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Pending,
    Requested,
    Saved,
    Failed,
}

/// The figure being shown and the bookkeeping for saving it once.
pub struct AppState {
    pub figure: Figure,
    pub shades: Shades,
    pub output_path: PathBuf,
    pub capture: CaptureState,
    frames_painted: u32,
}

impl AppState {
    pub fn new(figure: Figure, output_path: PathBuf) -> Self {
        Self {
            figure,
            shades: Shades::default(),
            output_path,
            capture: CaptureState::Pending,
            frames_painted: 0,
        }
    }

    /// Record a painted frame. Returns `true` exactly once, when the
    /// screenshot should be requested.
    pub fn frame_painted(&mut self) -> bool {
        self.frames_painted = self.frames_painted.saturating_add(1);
        if self.capture == CaptureState::Pending && self.frames_painted >= SETTLE_FRAMES {
            self.capture = CaptureState::Requested;
            return true;
        }
        false
    }

    /// Still waiting on a screenshot.
    pub fn capture_in_progress(&self) -> bool {
        matches!(self.capture, CaptureState::Pending | CaptureState::Requested)
    }

    /// Save the screenshot the viewport delivered.
    pub fn finish_capture(&mut self, image: &ColorImage) {
        if self.capture != CaptureState::Requested {
            return;
        }
        match output::save_png(image, &self.output_path) {
            Ok(()) => {
                log::info!(
                    "Saved {}x{} figure to {}",
                    image.size[0],
                    image.size[1],
                    self.output_path.display()
                );
                self.capture = CaptureState::Saved;
            }
            Err(e) => {
                log::error!("Failed to save figure: {e:#}");
                self.capture = CaptureState::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::figure::compose;
    use crate::data::align::AlignedTables;
    use crate::data::model::YearTable;

    fn state(output_path: PathBuf) -> AppState {
        let figure = compose(&AlignedTables {
            age: YearTable::new(Vec::new()),
            sector: YearTable::new(Vec::new()),
            first_year: 2010,
            last_year: 2013,
        });
        AppState::new(figure, output_path)
    }

    fn white(size: [usize; 2]) -> ColorImage {
        let rgba = vec![255u8; size[0] * size[1] * 4];
        ColorImage::from_rgba_unmultiplied(size, &rgba)
    }

    #[test]
    fn screenshot_requested_once_after_settling() {
        let mut state = state(PathBuf::from("unused.png"));
        assert!(!state.frame_painted());
        assert!(state.frame_painted());
        assert_eq!(state.capture, CaptureState::Requested);
        assert!(!state.frame_painted());
        assert!(state.capture_in_progress());
    }

    #[test]
    fn unrequested_screenshot_is_ignored() {
        let mut state = state(PathBuf::from("/nonexistent-dir/unused.png"));
        state.finish_capture(&white([2, 2]));
        assert_eq!(state.capture, CaptureState::Pending);
    }

    #[test]
    fn saves_requested_screenshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wage_gap.png");
        let mut state = state(path.clone());
        state.frame_painted();
        state.frame_painted();

        state.finish_capture(&white([4, 3]));
        assert_eq!(state.capture, CaptureState::Saved);
        assert!(!state.capture_in_progress());
        assert_eq!(image::image_dimensions(&path).unwrap(), (4, 3));
    }

    #[test]
    fn failed_save_is_not_retried() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state(dir.path().join("missing").join("wage_gap.png"));
        state.frame_painted();
        state.frame_painted();
        state.finish_capture(&white([2, 2]));
        assert_eq!(state.capture, CaptureState::Failed);
        assert!(!state.frame_painted());
    }
}
