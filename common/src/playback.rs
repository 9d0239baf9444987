//! Music playback state.
//!
//! [`Playback`] mirrors whether the looping track is actually playing. The
//! media element is the source of truth: [`toggle`](Playback::toggle) flips the
//! flag optimistically and returns the request to send, and the element's
//! own play/pause notifications ([`on_event`](Playback::on_event)) settle the
//! final value. A rejected play request leaves the state "not playing".

/// Request the card sends to the media element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaybackRequest {
    Play,
    Pause,
}

/// Notification reported by the media element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaEvent {
    /// Playback actually started.
    Played,
    /// Playback actually stopped.
    Paused,
}

/// Mirrored play/pause state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Playback {
    playing: bool,
    autoplay_attempted: bool,
}

impl Playback {
    pub const fn new() -> Self {
        Self {
            playing: false,
            autoplay_attempted: false,
        }
    }

    #[inline]
    pub const fn is_playing(&self) -> bool { self.playing }

    /// Decide the request for a user toggle and flip the local flag.
    pub fn toggle(&mut self) -> PlaybackRequest {
        let request = if self.playing {
            PlaybackRequest::Pause
        } else {
            PlaybackRequest::Play
        };
        self.playing = !self.playing;
        request
    }

    /// One best-effort play request when the card first opens.
    ///
    /// Returns `None` if autoplay was already attempted or music is playing.
    pub fn autoplay(&mut self) -> Option<PlaybackRequest> {
        if self.autoplay_attempted || self.playing {
            return None;
        }
        self.autoplay_attempted = true;
        Some(PlaybackRequest::Play)
    }

    /// Allow one more autoplay attempt, e.g. after the card is closed.
    pub fn rearm_autoplay(&mut self) { self.autoplay_attempted = false; }

    /// Reconcile with what the media element reports.
    pub fn on_event(
        &mut self,
        event: MediaEvent,
    ) {
        self.playing = matches!(event, MediaEvent::Played);
    }

    /// A play request was refused by the host.
    pub fn on_play_rejected(&mut self) {
        log::debug!("play request rejected, staying paused");
        self.playing = false;
    }
}
