/// Dashboard composition root
///
/// Wires the loader, the view-mode store, the draft dialog and the request
/// builder together. All state changes happen in `update` in response to a
/// `Message`; `view` only reads.

use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Task, Theme};

use crate::config::AppConfig;
use crate::error::LoadFailure;
use crate::request::{Navigator, RequestBuilder, SubmissionRequest};
use crate::state::{Dataset, DraftField, TargetDraftController, ViewModeStore};
use crate::ui;
use crate::uplink::imagery::fetch_image;
use crate::uplink::loader::fetch_dataset;
use crate::uplink::{DataLoader, ImageryCache, LoadState};

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The dataset read finished
    DatasetLoaded(Result<Dataset, LoadFailure>),
    /// User asked to retry a failed load
    RetryLoad,
    /// User flipped a card between optical and thermal
    ToggleView(String),
    /// A card image finished loading (URI, handle or reason)
    ImageLoaded(String, Result<Handle, String>),
    /// User clicked "Add Target"
    OpenDialog,
    /// User cancelled the dialog
    CloseDialog,
    /// User typed into one draft field
    DraftChanged(DraftField, String),
    /// User clicked "Initialize Request"
    SubmitDraft,
}

/// Main application state
pub struct Dashboard {
    loader: DataLoader,
    view_modes: ViewModeStore,
    draft: TargetDraftController,
    requests: RequestBuilder,
    navigator: Box<dyn Navigator>,
    imagery: ImageryCache,
    strict_validation: bool,
    /// Last submission problem, shown inside the dialog
    submit_error: Option<String>,
}

impl Dashboard {
    /// Create the dashboard and start the one dataset read
    pub fn new(config: AppConfig, navigator: Box<dyn Navigator>) -> (Self, Task<Message>) {
        let mut loader = DataLoader::new(config.dataset.clone());
        let task = match loader.request() {
            Some(source) => Task::perform(fetch_dataset(source), Message::DatasetLoaded),
            None => Task::none(),
        };

        let dashboard = Dashboard {
            loader,
            view_modes: ViewModeStore::new(),
            draft: TargetDraftController::new(),
            requests: RequestBuilder::new(config.submission_url),
            navigator,
            imagery: ImageryCache::new(config.dataset),
            strict_validation: config.strict_validation,
            submit_error: None,
        };

        (dashboard, task)
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DatasetLoaded(result) => {
                if !self.loader.complete(result) {
                    return Task::none();
                }

                let uris: Vec<String> = self
                    .loader
                    .dataset()
                    .map(|dataset| {
                        dataset
                            .locations
                            .iter()
                            .map(|location| location.image_visual.clone())
                            .collect()
                    })
                    .unwrap_or_default();

                Task::batch(uris.iter().map(|uri| self.request_image(uri)))
            }
            Message::RetryLoad => match self.loader.retry() {
                Some(source) => Task::perform(fetch_dataset(source), Message::DatasetLoaded),
                None => Task::none(),
            },
            Message::ToggleView(id) => {
                let thermal = self.view_modes.toggle(&id);
                log::debug!("Target {} now {}", id, if thermal { "thermal" } else { "optical" });

                let uri = self.loader.dataset().and_then(|dataset| {
                    dataset
                        .locations
                        .iter()
                        .find(|location| location.id == id)
                        .map(|location| location.image_for(thermal).to_string())
                });

                match uri {
                    Some(uri) => self.request_image(&uri),
                    None => Task::none(),
                }
            }
            Message::ImageLoaded(uri, result) => {
                self.imagery.complete(uri, result);
                Task::none()
            }
            Message::OpenDialog => {
                self.draft.open();
                self.submit_error = None;
                Task::none()
            }
            Message::CloseDialog => {
                self.draft.close();
                self.submit_error = None;
                Task::none()
            }
            Message::DraftChanged(field, value) => {
                if self.draft.is_open() {
                    self.draft.set_field(field, value);
                }
                Task::none()
            }
            Message::SubmitDraft => {
                if self.draft.is_open() {
                    self.submit();
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let dataset = match self.loader.state() {
            LoadState::Loading => return ui::status::loading(),
            LoadState::Failed(failure) => return ui::status::failed(failure),
            LoadState::Ready(dataset) => dataset,
        };

        let today = chrono::Local::now().date_naive();

        let cards: Vec<Element<Message>> = dataset
            .locations
            .iter()
            .map(|location| {
                let thermal = self.view_modes.is_thermal(&location.id);
                let slot = self.imagery.slot(location.image_for(thermal));
                ui::card::view(location, thermal, slot)
            })
            .collect();

        let grid: Element<Message> = if cards.is_empty() {
            text("No targets in this feed.").size(16).into()
        } else {
            iced_aw::Wrap::with_elements(cards)
                .spacing(24.0)
                .line_spacing(24.0)
                .into()
        };

        let page = scrollable(
            column![ui::header::view(dataset, today), grid]
                .spacing(40)
                .padding(32),
        );
        let base = container(page).width(Length::Fill).height(Length::Fill);

        if self.draft.is_open() {
            ui::modal::overlay(
                base,
                ui::modal::dialog(self.draft.current_draft(), self.submit_error.as_deref()),
                Message::CloseDialog,
            )
        } else {
            base.into()
        }
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Build the request for the current draft and hand it to the navigator
    ///
    /// The dialog closes only after the navigator accepted the URL.
    fn submit(&mut self) {
        let request = match self.build_request() {
            Ok(request) => request,
            Err(reason) => {
                log::warn!("Submission rejected: {}", reason);
                self.submit_error = Some(reason);
                return;
            }
        };

        log::info!(
            "📨 Submitting '{}' to {}",
            request.title,
            self.requests.host().unwrap_or("submission sink")
        );

        match self.navigator.open(&request.destination_url) {
            Ok(()) => {
                self.draft.close();
                self.submit_error = None;
            }
            Err(e) => {
                log::error!("❌ {}", e);
                self.submit_error = Some(e.to_string());
            }
        }
    }

    fn build_request(&self) -> Result<SubmissionRequest, String> {
        let draft = self.draft.current_draft();
        if !self.strict_validation {
            return Ok(self.requests.build(draft));
        }

        let existing_ids = self
            .loader
            .dataset()
            .into_iter()
            .flat_map(|dataset| dataset.locations.iter().map(|location| location.id.as_str()));

        self.requests
            .build_checked(draft, existing_ids)
            .map_err(|e| e.to_string())
    }

    fn request_image(&mut self, uri: &str) -> Task<Message> {
        match self.imagery.request(uri) {
            Some(source) => {
                let uri = uri.to_string();
                Task::perform(fetch_image(source), move |result| {
                    Message::ImageLoaded(uri.clone(), result)
                })
            }
            None => Task::none(),
        }
    }
}
