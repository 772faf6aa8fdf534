//! Submission controller
//!
//! Runs one submission attempt end to end: reconcile, send, then settle the
//! basket and form. Only a confirmed send mutates anything.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{debug, info, warn};

use crate::{
    basket::BasketStore,
    submission::{
        channel::SubmissionChannel,
        errors::SubmissionError,
        form::ContactForm,
        payload::SubmissionMode,
        reconcile::reconcile,
    },
};

/// Whether the submission screen is still on display. Responses that arrive
/// after it is gone are ignored.
#[derive(Debug, Clone)]
pub struct ScreenLifetime {
    mounted: Arc<AtomicBool>,
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl ScreenLifetime {
    /// A lifetime for a screen that is currently mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the screen as gone.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    /// Whether the screen is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}

/// How a submission attempt ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The channel acknowledged the payload.
    Submitted(SubmissionMode),

    /// The screen went away before the response arrived; nothing was changed.
    Discarded,
}

/// Clears the in-flight flag however the attempt ends, including when the
/// future is dropped mid-request.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Submission controller for one contact screen.
#[derive(Clone)]
pub struct SubmissionController {
    basket: BasketStore,
    channel: Arc<dyn SubmissionChannel>,
    lifetime: ScreenLifetime,
    in_flight: Arc<AtomicBool>,
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("basket", &self.basket)
            .field("lifetime", &self.lifetime)
            .field("in_flight", &self.is_submitting())
            .finish_non_exhaustive()
    }
}

impl SubmissionController {
    /// A controller for a freshly mounted screen.
    #[must_use]
    pub fn new(basket: BasketStore, channel: Arc<dyn SubmissionChannel>) -> Self {
        Self::with_lifetime(basket, channel, ScreenLifetime::new())
    }

    /// A controller tied to an existing screen lifetime.
    #[must_use]
    pub fn with_lifetime(
        basket: BasketStore,
        channel: Arc<dyn SubmissionChannel>,
        lifetime: ScreenLifetime,
    ) -> Self {
        Self {
            basket,
            channel,
            lifetime,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The mode the next submission would use.
    pub fn mode(&self) -> SubmissionMode {
        self.basket.with_items(SubmissionMode::for_basket)
    }

    /// Whether a submission is waiting on the channel. The submit control
    /// should be disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// The screen lifetime this controller reports to.
    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    /// Submit the form together with the current basket.
    ///
    /// On success the form is reset and, for quotes, the basket is cleared.
    /// On any error both are left exactly as they were.
    ///
    /// # Errors
    ///
    /// - [`SubmissionError::InFlight`] if another submission is pending.
    /// - [`SubmissionError::MissingFields`] if required fields are blank; the
    ///   channel is not called.
    /// - [`SubmissionError::Channel`] if the channel rejects or cannot be
    ///   reached.
    pub async fn submit(
        &self,
        form: &mut ContactForm,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("submission refused while another is in flight");
            return Err(SubmissionError::InFlight);
        };

        let payload = self.basket.with_items(|items| reconcile(items, form))?;
        let mode = payload.mode();

        debug!(?mode, "sending submission");

        let sent = self.channel.send(&payload).await;

        if !self.lifetime.is_mounted() {
            warn!(?mode, "ignoring submission response for unmounted screen");
            return Ok(SubmissionOutcome::Discarded);
        }

        if let Err(source) = sent {
            warn!(?mode, error = %source, "submission failed");
            return Err(source.into());
        }

        if mode == SubmissionMode::Quote {
            self.basket.clear_basket();
        }

        form.reset();

        info!(?mode, "submission acknowledged");

        Ok(SubmissionOutcome::Submitted(mode))
    }
}
