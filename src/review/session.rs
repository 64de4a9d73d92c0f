//! Session driver binding a review controller to the platform services.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::media::CapturedMedia;
use crate::platform::{MediaLibrary, StorageAccess};
use crate::review::controller::ReviewController;
use crate::review::events::{Effect, ReviewEvent};
use crate::review::save;

/// Drives one review screen: events go in through [`ReviewSession::dispatch`],
/// effects for the shell come out of the receiver handed back by
/// [`ReviewSession::new`].
///
/// [`Effect::StartSave`] never reaches the shell. The session runs the
/// workflow on a `tokio` task and feeds the outcome back into the
/// controller as `SaveFinished`. A workflow that outlives the screen
/// finishes quietly: sends to a dropped receiver are ignored.
pub struct ReviewSession {
    controller: Arc<Mutex<ReviewController>>,
    storage: Arc<dyn StorageAccess>,
    library: Arc<dyn MediaLibrary>,
    effects: UnboundedSender<Effect>,
}

impl ReviewSession {
    pub fn new(
        media: CapturedMedia,
        storage: Arc<dyn StorageAccess>,
        library: Arc<dyn MediaLibrary>,
    ) -> (Self, UnboundedReceiver<Effect>) {
        let (effects, receiver) = mpsc::unbounded_channel();
        let session = Self {
            controller: Arc::new(Mutex::new(ReviewController::new(media))),
            storage,
            library,
            effects,
        };
        (session, receiver)
    }

    /// Read controller state for a render pass.
    pub fn with_controller<T>(&self, f: impl FnOnce(&ReviewController) -> T) -> T {
        f(&lock_or_recover(&self.controller))
    }

    /// Apply one event; resulting effects are forwarded to the shell, and
    /// save workflows are spawned as needed.
    pub fn dispatch(&self, event: ReviewEvent) {
        let effects = lock_or_recover(&self.controller).handle(event);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::StartSave => self.spawn_save(),
            other => {
                // Shell may already be gone, nothing left to deliver to.
                let _ = self.effects.send(other);
            }
        }
    }

    fn spawn_save(&self) {
        let controller = Arc::clone(&self.controller);
        let storage = Arc::clone(&self.storage);
        let library = Arc::clone(&self.library);
        let effects = self.effects.clone();
        let media = lock_or_recover(&controller).media().clone();

        tokio::spawn(async move {
            let result = save::run_save(storage.as_ref(), library.as_ref(), &media).await;
            let follow_up =
                lock_or_recover(&controller).handle(ReviewEvent::SaveFinished(result));
            for effect in follow_up {
                let _ = effects.send(effect);
            }
        });
    }
}

/// Lock the controller, recovering from poison if necessary
fn lock_or_recover(
    controller: &Arc<Mutex<ReviewController>>,
) -> MutexGuard<'_, ReviewController> {
    match controller.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Recovering from poisoned mutex in ReviewSession");
            poisoned.into_inner()
        }
    }
}
