use leptos::{html::Input, prelude::*};
use state::converter::{ConverterHost, SaveRequest};
use utils::web::{clear_file_input, trigger_download};

/// Carries out converter commands against the live page.
///
/// `ticking` is the switch the page's interval follows; the file input is
/// reached through its node ref.
#[derive(Clone, Copy)]
pub struct BrowserHost {
    ticking: RwSignal<bool>,
    picker: NodeRef<Input>,
}

impl BrowserHost {
    pub fn new(picker: NodeRef<Input>) -> Self {
        Self {
            ticking: RwSignal::new(false),
            picker,
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking.get()
    }
}

impl ConverterHost for BrowserHost {
    fn start_ticking(&self) {
        self.ticking.set(true);
    }

    fn stop_ticking(&self) {
        self.ticking.set(false);
    }

    fn save(&self, request: SaveRequest) {
        log::debug!("saving {} as {}", request.url, request.file_name);
        trigger_download(&request.url, &request.file_name);
    }

    fn clear_picker(&self) {
        if let Some(input) = self.picker.get_untracked() {
            clear_file_input(&input);
        }
    }
}
