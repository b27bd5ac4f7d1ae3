//! State machine behind the converter screen.
//!
//! The "conversion" is simulated: a recurring tick walks a percentage from 0
//! to 100 and the published result is a clone of the original preview handle.
//! No bytes are ever read or transformed.
//!
//! Every user action goes through one method on [`ConverterState`]. Each
//! method mutates the state and hands back the [`Command`]s the host has to
//! carry out (timer control, saving, clearing the file input), so the state
//! itself never touches the browser.

mod browser;

use consts::{
    INVALID_SELECTION_MSG, MISSING_FILE_MSG, PROGRESS_COMPLETE, PROGRESS_STEP, VIDEO_MEDIA_PREFIX,
};
use thiserror::Error;
use utils::web::converted_file_name;

/// A displayable locator for a picked file.
///
/// Releasing the underlying resource is tied to dropping the last clone.
pub trait PreviewHandle: Clone {
    fn url(&self) -> &str;
}

/// A user-picked local file.
pub trait LocalFile {
    type Preview: PreviewHandle;

    fn name(&self) -> String;
    fn media_type(&self) -> String;
    fn create_preview(&self) -> Self::Preview;
}

pub fn is_video_media_type(media_type: &str) -> bool {
    media_type.starts_with(VIDEO_MEDIA_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConverterError {
    #[error("{}", INVALID_SELECTION_MSG)]
    InvalidSelection,
    #[error("{}", MISSING_FILE_MSG)]
    MissingFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionPhase {
    #[default]
    Idle,
    Running,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartTicking,
    StopTicking,
    Save(SaveRequest),
    ClearPicker,
}

/// Side effects a transition may ask for.
pub trait ConverterHost {
    fn start_ticking(&self);
    fn stop_ticking(&self);
    fn save(&self, request: SaveRequest);
    fn clear_picker(&self);
}

impl Command {
    pub fn run(self, host: &impl ConverterHost) {
        match self {
            Command::StartTicking => host.start_ticking(),
            Command::StopTicking => host.stop_ticking(),
            Command::Save(request) => host.save(request),
            Command::ClearPicker => host.clear_picker(),
        }
    }
}

pub struct ConverterState<F: LocalFile> {
    selected: Option<F>,
    preview: Option<F::Preview>,
    // Always a clone of `preview` when set
    result: Option<F::Preview>,
    phase: ConversionPhase,
    percent: u8,
    error: Option<ConverterError>,
}

impl<F: LocalFile> Default for ConverterState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            preview: None,
            result: None,
            phase: ConversionPhase::Idle,
            percent: 0,
            error: None,
        }
    }
}

impl<F: LocalFile> ConverterState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a file-pick event. `None` means the dialog was dismissed.
    ///
    /// A rejected file leaves the previous selection (and any result) in
    /// place. An accepted one replaces the preview, drops any result and, if a
    /// simulation was running, stops it.
    pub fn select(&mut self, file: Option<F>) -> Vec<Command> {
        let Some(file) = file else {
            return vec![];
        };
        if !is_video_media_type(&file.media_type()) {
            self.error = Some(ConverterError::InvalidSelection);
            return vec![];
        }

        let was_running = self.phase == ConversionPhase::Running;
        log::debug!("selected {} ({})", file.name(), file.media_type());
        self.preview = Some(file.create_preview());
        self.selected = Some(file);
        self.result = None;
        self.error = None;
        self.phase = ConversionPhase::Idle;
        self.percent = 0;

        if was_running {
            vec![Command::StopTicking]
        } else {
            vec![]
        }
    }

    pub fn convert(&mut self) -> Vec<Command> {
        if self.phase != ConversionPhase::Idle {
            log::debug!("convert ignored while {:?}", self.phase);
            return vec![];
        }
        if self.selected.is_none() {
            self.error = Some(ConverterError::MissingFile);
            return vec![];
        }

        self.phase = ConversionPhase::Running;
        self.percent = 0;
        vec![Command::StartTicking]
    }

    pub fn tick(&mut self) -> Vec<Command> {
        if self.phase != ConversionPhase::Running {
            return vec![];
        }

        self.percent = self
            .percent
            .saturating_add(PROGRESS_STEP)
            .min(PROGRESS_COMPLETE);
        if self.percent < PROGRESS_COMPLETE {
            return vec![];
        }

        self.result = self.preview.clone();
        self.phase = ConversionPhase::Done;
        log::info!(
            "simulated conversion of {} finished",
            self.selected_name().unwrap_or_default()
        );
        vec![Command::StopTicking]
    }

    pub fn download(&self) -> Vec<Command> {
        let Some(result) = &self.result else {
            return vec![];
        };
        let file_name = converted_file_name(self.selected_name().as_deref());
        vec![Command::Save(SaveRequest {
            url: result.url().to_string(),
            file_name,
        })]
    }

    pub fn reset(&mut self) -> Vec<Command> {
        *self = Self::default();
        vec![Command::StopTicking, Command::ClearPicker]
    }

    pub fn phase(&self) -> ConversionPhase {
        self.phase
    }

    pub fn processing(&self) -> bool {
        self.phase == ConversionPhase::Running
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn can_convert(&self) -> bool {
        self.has_selection() && self.phase == ConversionPhase::Idle
    }

    pub fn selected_name(&self) -> Option<String> {
        self.selected.as_ref().map(LocalFile::name)
    }

    pub fn preview_url(&self) -> Option<String> {
        self.preview.as_ref().map(|p| p.url().to_string())
    }

    pub fn result_url(&self) -> Option<String> {
        self.result.as_ref().map(|r| r.url().to_string())
    }

    pub fn error(&self) -> Option<ConverterError> {
        self.error
    }

    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use consts::PROGRESS_TICK_INTERVAL;
    use proptest::prelude::*;

    use super::*;

    /// Hands out preview URLs and remembers which are still alive.
    #[derive(Clone, Default)]
    struct Mint {
        next: Rc<Cell<usize>>,
        issued: Rc<RefCell<Vec<Weak<str>>>>,
    }

    impl Mint {
        fn file(&self, name: &str, media_type: &str) -> FakeFile {
            FakeFile {
                name: name.to_string(),
                media_type: media_type.to_string(),
                mint: self.clone(),
            }
        }

        fn live(&self) -> usize {
            self.issued
                .borrow()
                .iter()
                .filter(|url| url.strong_count() > 0)
                .count()
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct FakeUrl(Rc<str>);

    impl PreviewHandle for FakeUrl {
        fn url(&self) -> &str {
            &self.0
        }
    }

    struct FakeFile {
        name: String,
        media_type: String,
        mint: Mint,
    }

    impl LocalFile for FakeFile {
        type Preview = FakeUrl;

        fn name(&self) -> String {
            self.name.clone()
        }

        fn media_type(&self) -> String {
            self.media_type.clone()
        }

        fn create_preview(&self) -> FakeUrl {
            let n = self.mint.next.get() + 1;
            self.mint.next.set(n);
            let url: Rc<str> = Rc::from(format!("blob:test/{n}"));
            self.mint.issued.borrow_mut().push(Rc::downgrade(&url));
            FakeUrl(url)
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        ticking: Cell<bool>,
        starts: Cell<usize>,
        saved: RefCell<Vec<SaveRequest>>,
        picker_cleared: Cell<usize>,
    }

    impl ConverterHost for RecordingHost {
        fn start_ticking(&self) {
            self.ticking.set(true);
            self.starts.set(self.starts.get() + 1);
        }

        fn stop_ticking(&self) {
            self.ticking.set(false);
        }

        fn save(&self, request: SaveRequest) {
            self.saved.borrow_mut().push(request);
        }

        fn clear_picker(&self) {
            self.picker_cleared.set(self.picker_cleared.get() + 1);
        }
    }

    /// Drives the state the way the page does, with a virtual clock standing
    /// in for the browser interval.
    #[derive(Default)]
    struct Harness {
        state: ConverterState<FakeFile>,
        host: RecordingHost,
        mint: Mint,
    }

    impl Harness {
        fn apply(&mut self, action: impl FnOnce(&mut ConverterState<FakeFile>) -> Vec<Command>) {
            for command in action(&mut self.state) {
                command.run(&self.host);
            }
        }

        fn pick(&mut self, name: &str, media_type: &str) {
            let file = self.mint.file(name, media_type);
            self.apply(|s| s.select(Some(file)));
        }

        /// Fires one tick per elapsed interval while the host timer is armed
        /// and returns the percent observed after each tick.
        fn advance(&mut self, by: Duration) -> Vec<u8> {
            let ticks = by.as_millis() / PROGRESS_TICK_INTERVAL.as_millis();
            let mut seen = Vec::new();
            for _ in 0..ticks {
                if self.host.ticking.get() {
                    self.apply(ConverterState::tick);
                    seen.push(self.state.percent());
                }
            }
            seen
        }
    }

    const FULL_RUN: Duration = Duration::from_secs(10);

    #[test]
    fn clip_scenario_end_to_end() {
        let mut h = Harness::default();

        h.pick("clip.mp4", "video/mp4");
        let u1 = h.state.preview_url().expect("preview");
        assert_eq!(u1, "blob:test/1");
        assert_eq!(h.state.error_message(), "");
        assert_eq!(h.state.result_url(), None);

        h.apply(ConverterState::convert);
        assert!(h.state.processing());
        assert_eq!(h.state.percent(), 0);
        assert!(h.host.ticking.get());

        let seen = h.advance(FULL_RUN);
        let expected: Vec<u8> = (1..=50).map(|n| n * 2).collect();
        assert_eq!(seen, expected);
        assert_eq!(h.state.percent(), 100);
        assert_eq!(h.state.phase(), ConversionPhase::Done);
        assert!(!h.state.processing());
        assert!(!h.host.ticking.get());
        assert_eq!(h.state.result_url(), Some(u1.clone()));

        h.apply(|s| s.download());
        assert_eq!(
            h.host.saved.borrow().as_slice(),
            &[SaveRequest {
                url: u1,
                file_name: "converted_clip.mp4".to_string(),
            }]
        );

        h.apply(ConverterState::reset);
        assert!(!h.state.has_selection());
        assert_eq!(h.state.preview_url(), None);
        assert_eq!(h.state.result_url(), None);
        assert_eq!(h.state.percent(), 0);
        assert_eq!(h.state.error_message(), "");
        assert_eq!(h.host.picker_cleared.get(), 1);
        assert_eq!(h.mint.live(), 0);
    }

    #[test]
    fn image_is_rejected_without_preview() {
        let mut h = Harness::default();
        h.pick("shot.png", "image/png");

        assert_eq!(h.state.error_message(), "Please select a valid video file");
        assert_eq!(h.state.error(), Some(ConverterError::InvalidSelection));
        assert_eq!(h.state.preview_url(), None);
        assert!(!h.state.has_selection());
        assert_eq!(h.mint.live(), 0);
    }

    #[test]
    fn rejected_file_keeps_previous_selection_and_result() {
        let mut h = Harness::default();
        h.pick("clip.mp4", "video/mp4");
        h.apply(ConverterState::convert);
        h.advance(FULL_RUN);
        let preview = h.state.preview_url();

        h.pick("notes.txt", "text/plain");

        assert_eq!(h.state.preview_url(), preview);
        assert_eq!(h.state.result_url(), preview);
        assert_eq!(h.state.selected_name().as_deref(), Some("clip.mp4"));
        assert_eq!(h.state.error_message(), "Please select a valid video file");
    }

    #[test]
    fn dismissed_dialog_changes_nothing() {
        let mut h = Harness::default();
        h.pick("shot.png", "image/png");
        h.apply(|s| s.select(None));

        assert_eq!(h.state.error(), Some(ConverterError::InvalidSelection));
        assert!(!h.state.has_selection());
    }

    #[test]
    fn valid_selection_clears_error_and_result() {
        let mut h = Harness::default();
        h.pick("clip.mp4", "video/mp4");
        h.apply(ConverterState::convert);
        h.advance(FULL_RUN);
        h.pick("shot.png", "image/png");

        h.pick("other.webm", "video/webm");

        assert_eq!(h.state.error(), None);
        assert_eq!(h.state.result_url(), None);
        assert_eq!(h.state.preview_url().as_deref(), Some("blob:test/2"));
        assert_eq!(h.state.phase(), ConversionPhase::Idle);
        assert_eq!(h.mint.live(), 1);
    }

    #[test]
    fn convert_without_file_reports_and_stays_idle() {
        let mut h = Harness::default();
        h.apply(ConverterState::convert);

        assert_eq!(h.state.error_message(), "Please select a video file first");
        assert_eq!(h.state.phase(), ConversionPhase::Idle);
        assert!(!h.host.ticking.get());
        assert_eq!(h.host.starts.get(), 0);
        assert!(h.advance(FULL_RUN).is_empty());
    }

    #[test]
    fn convert_is_ignored_while_running_or_done() {
        let mut h = Harness::default();
        h.pick("clip.mp4", "video/mp4");
        h.apply(ConverterState::convert);
        h.advance(Duration::from_millis(500));

        assert!(h.state.convert().is_empty());
        assert_eq!(h.state.percent(), 10);

        h.advance(FULL_RUN);
        assert!(h.state.convert().is_empty());
        assert_eq!(h.state.phase(), ConversionPhase::Done);
        assert_eq!(h.host.starts.get(), 1);
    }

    #[test]
    fn reset_mid_run_stops_ticks() {
        let mut h = Harness::default();
        h.pick("clip.mp4", "video/mp4");
        h.apply(ConverterState::convert);
        h.advance(Duration::from_millis(1_000));
        assert_eq!(h.state.percent(), 20);

        h.apply(ConverterState::reset);
        assert!(!h.host.ticking.get());
        assert!(h.advance(FULL_RUN).is_empty());
        assert_eq!(h.state.percent(), 0);
        assert_eq!(h.state.result_url(), None);
        assert_eq!(h.mint.live(), 0);
    }

    #[test]
    fn reset_from_idle_clears_error_and_picker() {
        let mut h = Harness::default();
        h.apply(ConverterState::convert);
        h.apply(ConverterState::reset);

        assert_eq!(h.state.error(), None);
        assert_eq!(h.host.picker_cleared.get(), 1);
    }

    #[test]
    fn new_selection_mid_run_aborts_and_releases_old_preview() {
        let mut h = Harness::default();
        h.pick("clip.mp4", "video/mp4");
        h.apply(ConverterState::convert);
        h.advance(Duration::from_millis(300));

        h.pick("other.mov", "video/quicktime");

        assert!(!h.host.ticking.get());
        assert_eq!(h.state.phase(), ConversionPhase::Idle);
        assert_eq!(h.state.percent(), 0);
        assert_eq!(h.mint.live(), 1);
        assert!(h.advance(FULL_RUN).is_empty());
        assert_eq!(h.state.result_url(), None);
    }

    #[test]
    fn stray_tick_outside_run_is_ignored() {
        let mut h = Harness::default();
        h.pick("clip.mp4", "video/mp4");

        assert!(h.state.tick().is_empty());
        assert_eq!(h.state.percent(), 0);
        assert_eq!(h.state.result_url(), None);
    }

    #[test]
    fn download_needs_a_result() {
        let mut h = Harness::default();
        h.pick("clip.mp4", "video/mp4");
        h.apply(|s| s.download());
        assert!(h.host.saved.borrow().is_empty());
    }

    #[test]
    fn download_falls_back_to_default_name() {
        let mut h = Harness::default();
        h.pick("", "video/mp4");
        h.apply(ConverterState::convert);
        h.advance(FULL_RUN);
        h.apply(|s| s.download());

        assert_eq!(h.host.saved.borrow()[0].file_name, "converted_video.mp4");
    }

    proptest! {
        #[test]
        fn non_video_types_never_replace_preview(
            subtype in "[a-z0-9.+-]{1,12}",
            top in "(image|audio|text|application|font|model)",
            keep_previous in any::<bool>(),
        ) {
            let mut h = Harness::default();
            if keep_previous {
                h.pick("clip.mp4", "video/mp4");
            }
            let before = h.state.preview_url();

            h.pick("upload", &format!("{top}/{subtype}"));

            prop_assert!(!h.state.error_message().is_empty());
            prop_assert_eq!(h.state.preview_url(), before);
        }

        #[test]
        fn video_types_are_accepted(subtype in "[a-z0-9.+-]{1,12}") {
            let mut h = Harness::default();
            h.pick("upload", &format!("video/{subtype}"));

            prop_assert!(h.state.preview_url().is_some());
            prop_assert_eq!(h.state.error_message(), "");
            prop_assert_eq!(h.state.result_url(), None);
        }

        #[test]
        fn percent_climbs_in_fixed_steps(ticks in 0u8..80) {
            let mut h = Harness::default();
            h.pick("clip.mp4", "video/mp4");
            h.apply(ConverterState::convert);

            let seen = h.advance(PROGRESS_TICK_INTERVAL * u32::from(ticks));

            let mut last = 0;
            for p in &seen {
                prop_assert!(*p >= last);
                prop_assert!(*p - last == PROGRESS_STEP);
                last = *p;
            }
            prop_assert_eq!(h.state.percent(), (ticks.min(50)) * 2);
            prop_assert_eq!(h.state.has_result(), ticks >= 50);
        }
    }
}
