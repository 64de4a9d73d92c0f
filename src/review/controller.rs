//! Review screen controller.
//!
//! Pure event-in, effects-out core for one captured artifact: the save
//! workflow state machine, the one-way load latch behind screen opacity,
//! and liveness-driven playback for video. All I/O stays behind the
//! session driver; this type never awaits.

use crate::media::CapturedMedia;
use crate::review::events::{Effect, MediaInfo, Notice, RendererEvent, ReviewEvent};
use crate::review::playback::{playback_active, PlaybackCommand, PlaybackSpec};
use crate::review::save::SaveError;
use crate::state_machine::{SaveState, SaveStateMachine};

pub struct ReviewController {
    media: CapturedMedia,
    save: SaveStateMachine,
    has_loaded: bool,
    foreground: bool,
    focused: bool,
    close_requested: bool,
}

impl ReviewController {
    /// Controller for a freshly entered review screen. The screen starts
    /// focused in a foregrounded app, since the user just navigated here.
    pub fn new(media: CapturedMedia) -> Self {
        log::info!("Reviewing {} at {}", media.media_type(), media.path());
        Self {
            media,
            save: SaveStateMachine::new(),
            has_loaded: false,
            foreground: true,
            focused: true,
            close_requested: false,
        }
    }

    pub fn media(&self) -> &CapturedMedia {
        &self.media
    }

    /// Source the renderer should display.
    pub fn source_uri(&self) -> String {
        self.media.file_uri()
    }

    pub fn save_state(&self) -> SaveState {
        self.save.current()
    }

    /// The save trigger is disabled outside `Idle`.
    pub fn save_enabled(&self) -> bool {
        self.save.can_trigger_save()
    }

    /// Screen opacity: fully transparent until the renderer reports
    /// ready, fully visible afterwards.
    pub fn opacity(&self) -> f32 {
        if self.has_loaded {
            1.0
        } else {
            0.0
        }
    }

    pub fn playback_active(&self) -> bool {
        playback_active(self.foreground, self.focused)
    }

    /// Player flags for video artifacts; photos have no player.
    pub fn playback_spec(&self) -> Option<PlaybackSpec> {
        self.media.is_video().then(PlaybackSpec::default)
    }

    /// Apply one event and collect the side effects the shell must run.
    pub fn handle(&mut self, event: ReviewEvent) -> Vec<Effect> {
        match event {
            ReviewEvent::SaveRequested => self.on_save_requested(),
            ReviewEvent::SaveFinished(result) => self.on_save_finished(result),
            ReviewEvent::Renderer(event) => self.on_renderer_event(event),
            ReviewEvent::Foreground(foreground) => {
                let was_active = self.playback_active();
                self.foreground = foreground;
                self.liveness_change(was_active)
            }
            ReviewEvent::Focused(focused) => {
                let was_active = self.playback_active();
                self.focused = focused;
                self.liveness_change(was_active)
            }
            ReviewEvent::CloseRequested => self.on_close_requested(),
        }
    }

    fn on_save_requested(&mut self) -> Vec<Effect> {
        if !self.save.can_trigger_save() {
            log::debug!("Save trigger ignored while {:?}", self.save.current());
            return Vec::new();
        }
        if let Err(e) = self.save.transition_to(SaveState::Saving) {
            log::error!("Could not enter saving state: {}", e);
            return Vec::new();
        }
        vec![Effect::StartSave]
    }

    fn on_save_finished(&mut self, result: Result<(), SaveError>) -> Vec<Effect> {
        if self.save.current() != SaveState::Saving {
            // Completion for a workflow this instance never started, or
            // one that already resolved. Tolerated, not acted on.
            log::warn!(
                "Stale save completion in state {:?}, dropping",
                self.save.current()
            );
            return Vec::new();
        }

        match result {
            Ok(()) => {
                if let Err(e) = self.save.transition_to(SaveState::Saved) {
                    log::error!("Could not mark save complete: {}", e);
                }
                Vec::new()
            }
            Err(error) => {
                if let Err(e) = self.save.transition_to(SaveState::Idle) {
                    log::error!("Could not roll back save state: {}", e);
                }
                let notice = match error {
                    SaveError::PermissionDenied => Notice::permission_denied(),
                    SaveError::Library(message) => {
                        Notice::save_failed(self.media.media_type(), &message)
                    }
                };
                vec![Effect::Notify(notice)]
            }
        }
    }

    fn on_renderer_event(&mut self, event: RendererEvent) -> Vec<Effect> {
        match event {
            RendererEvent::Ready => {
                if !self.has_loaded {
                    log::info!("Media ready for display");
                    self.has_loaded = true;
                }
            }
            RendererEvent::Loaded { info } => match info {
                MediaInfo::Image { width, height } => {
                    log::info!("Image loaded, size: {}x{}", width, height);
                }
                MediaInfo::Video {
                    width,
                    height,
                    duration_secs,
                    orientation,
                } => {
                    log::info!(
                        "Video loaded, size: {}x{} ({:?}, {:.1}s)",
                        width,
                        height,
                        orientation,
                        duration_secs
                    );
                }
            },
            RendererEvent::Failed { message } => {
                log::error!("Failed to load media: {}", message);
            }
        }
        Vec::new()
    }

    fn liveness_change(&self, was_active: bool) -> Vec<Effect> {
        if !self.media.is_video() {
            return Vec::new();
        }
        let active = self.playback_active();
        if active == was_active {
            return Vec::new();
        }
        let command = if active {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        };
        log::debug!("Playback liveness changed: {:?}", command);
        vec![Effect::Playback(command)]
    }

    fn on_close_requested(&mut self) -> Vec<Effect> {
        if self.close_requested {
            log::debug!("Close already requested, ignoring repeat");
            return Vec::new();
        }
        self.close_requested = true;
        vec![Effect::NavigateBack]
    }
}
