pub mod copy;

use web_time::Duration;

/// How often the simulated conversion advances.
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const PROGRESS_STEP: u8 = 2;
pub const PROGRESS_COMPLETE: u8 = 100;

// Media type prefix a picked file must carry to be accepted
pub const VIDEO_MEDIA_PREFIX: &str = "video/";
// Advisory filter for the native file dialog
pub const VIDEO_ACCEPT: &str = "video/*";

pub const CONVERTED_FILE_PREFIX: &str = "converted_";
pub const DEFAULT_DOWNLOAD_NAME: &str = "video.mp4";

/// Cosmetic CSS filter layered over the "converted" player. Never touches the
/// underlying bytes.
pub const CONVERTED_PREVIEW_FILTER: &str = "contrast(1.1) saturate(1.2) brightness(1.05)";

pub const INVALID_SELECTION_MSG: &str = "Please select a valid video file";
pub const MISSING_FILE_MSG: &str = "Please select a video file first";
