//! Background music.
//!
//! [`MusicPlayer`] pairs the mirrored [`Playback`] state with a
//! [`MediaElement`]. The element is the source of truth: requests go out
//! through [`MediaElement::play`]/[`MediaElement::pause`] and the state
//! settles when [`MusicPlayer::pump`] drains the element's notifications.
//!
//! The desktop build has no audio output. [`LoopingTrack`] stands in for a
//! media element: it knows its asset path, tracks a looping playhead, and
//! enforces an autoplay policy where playback before the first user gesture
//! is refused.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anniversary_common::{MediaEvent, Playback, PlaybackRequest};

/// Why a play request was refused.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("playback needs a user gesture first")]
    NotAllowed,
    #[error("audio asset not found: {}", .0.display())]
    MissingAsset(PathBuf),
}

impl PlaybackError {
    /// One-line reason for the event log.
    pub const fn short(&self) -> &'static str {
        match self {
            Self::NotAllowed => "autoplay blocked",
            Self::MissingAsset(_) => "song file missing",
        }
    }
}

/// Something that can play and pause one looping track.
pub trait MediaElement {
    /// Ask to start playing.
    ///
    /// # Errors
    /// Returns the reason the host refused to play.
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Notifications since the last call, oldest first.
    fn drain_events(&mut self) -> Vec<MediaEvent>;
}

// =============================================================================
// Simulated Media Element
// =============================================================================

/// Silent looping track with a browser-like autoplay policy.
pub struct LoopingTrack {
    path: PathBuf,
    available: bool,
    length: Duration,
    gesture_seen: bool,
    playing: bool,
    position: Duration,
    loops: u32,
    events: VecDeque<MediaEvent>,
}

impl LoopingTrack {
    /// Track at `path`; availability is checked once, here.
    pub fn new(
        path: impl AsRef<Path>,
        length: Duration,
    ) -> Self {
        let path = path.as_ref().to_path_buf();
        let available = path.is_file();
        if !available {
            log::warn!("audio asset {} not found, music will stay off", path.display());
        }
        Self::with_availability(path, length, available)
    }

    fn with_availability(
        path: PathBuf,
        length: Duration,
        available: bool,
    ) -> Self {
        Self {
            path,
            available,
            length,
            gesture_seen: false,
            playing: false,
            position: Duration::ZERO,
            loops: 0,
            events: VecDeque::new(),
        }
    }

    /// Record a user interaction; play requests are allowed from now on.
    pub fn notify_gesture(&mut self) { self.gesture_seen = true; }

    /// Move the playhead while playing, wrapping at the end of the track.
    pub fn advance(
        &mut self,
        dt: Duration,
    ) {
        if !self.playing || self.length.is_zero() {
            return;
        }
        self.position += dt;
        while self.position >= self.length {
            self.position -= self.length;
            self.loops = self.loops.wrapping_add(1);
            log::debug!("track looped ({} so far)", self.loops);
        }
    }

    pub const fn position(&self) -> Duration { self.position }

    pub const fn loops(&self) -> u32 { self.loops }

    pub fn path(&self) -> &Path { &self.path }
}

impl MediaElement for LoopingTrack {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if !self.gesture_seen {
            return Err(PlaybackError::NotAllowed);
        }
        if !self.available {
            return Err(PlaybackError::MissingAsset(self.path.clone()));
        }
        if !self.playing {
            self.playing = true;
            self.events.push_back(MediaEvent::Played);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.events.push_back(MediaEvent::Paused);
        }
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> { self.events.drain(..).collect() }
}

// =============================================================================
// Player
// =============================================================================

pub struct MusicPlayer<M> {
    element: M,
    state: Playback,
}

impl<M: MediaElement> MusicPlayer<M> {
    pub const fn new(element: M) -> Self {
        Self {
            element,
            state: Playback::new(),
        }
    }

    /// Flip play/pause and send exactly one request to the element.
    ///
    /// # Errors
    /// A refused play request is absorbed into the "not playing" state and
    /// handed back for logging. It is not retried.
    pub fn toggle(&mut self) -> Result<PlaybackRequest, PlaybackError> {
        let request = self.state.toggle();
        self.send(request)?;
        Ok(request)
    }

    /// Best-effort play when the card opens. Only the first call per open
    /// does anything.
    ///
    /// # Errors
    /// Returns the refusal, already absorbed into the state.
    pub fn autoplay(&mut self) -> Result<Option<PlaybackRequest>, PlaybackError> {
        let Some(request) = self.state.autoplay() else {
            return Ok(None);
        };
        self.send(request)?;
        Ok(Some(request))
    }

    /// Pause for a closing card and allow autoplay on the next open.
    pub fn stop_for_close(&mut self) {
        if self.state.is_playing() {
            self.element.pause();
            self.state.on_event(MediaEvent::Paused);
        }
        self.state.rearm_autoplay();
    }

    /// Apply the element's notifications to the mirrored state.
    pub fn pump(&mut self) {
        for event in self.element.drain_events() {
            log::debug!("media event {event:?}");
            self.state.on_event(event);
        }
    }

    pub const fn is_playing(&self) -> bool { self.state.is_playing() }

    pub const fn element(&self) -> &M { &self.element }

    pub fn element_mut(&mut self) -> &mut M { &mut self.element }

    fn send(
        &mut self,
        request: PlaybackRequest,
    ) -> Result<(), PlaybackError> {
        match request {
            PlaybackRequest::Play => {
                if let Err(err) = self.element.play() {
                    log::warn!("play refused: {err}");
                    self.state.on_play_rejected();
                    return Err(err);
                }
            }
            PlaybackRequest::Pause => self.element.pause(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts requests and plays along without a policy.
    #[derive(Default)]
    struct RecordingElement {
        plays: u32,
        pauses: u32,
        refuse: bool,
        events: Vec<MediaEvent>,
    }

    impl MediaElement for RecordingElement {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.plays += 1;
            if self.refuse {
                return Err(PlaybackError::NotAllowed);
            }
            self.events.push(MediaEvent::Played);
            Ok(())
        }

        fn pause(&mut self) {
            self.pauses += 1;
            self.events.push(MediaEvent::Paused);
        }

        fn drain_events(&mut self) -> Vec<MediaEvent> { std::mem::take(&mut self.events) }
    }

    fn track(available: bool) -> LoopingTrack {
        LoopingTrack::with_availability(PathBuf::from("assets/audio/song.mp3"), Duration::from_secs(10), available)
    }

    #[test]
    fn test_toggle_sends_one_request() {
        let mut player = MusicPlayer::new(RecordingElement::default());

        assert_eq!(player.toggle().ok(), Some(PlaybackRequest::Play));
        assert_eq!((player.element().plays, player.element().pauses), (1, 0));
        player.pump();
        assert!(player.is_playing());

        assert_eq!(player.toggle().ok(), Some(PlaybackRequest::Pause));
        assert_eq!((player.element().plays, player.element().pauses), (1, 1));
        player.pump();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_refused_play_leaves_paused() {
        let mut player = MusicPlayer::new(RecordingElement {
            refuse: true,
            ..RecordingElement::default()
        });
        assert!(matches!(player.toggle(), Err(PlaybackError::NotAllowed)));
        assert!(!player.is_playing());
        assert_eq!(player.element().plays, 1, "No retry");

        player.element_mut().refuse = false;
        assert_eq!(player.toggle().ok(), Some(PlaybackRequest::Play), "Next toggle asks to play again");
    }

    #[test]
    fn test_external_pause_wins() {
        let mut player = MusicPlayer::new(RecordingElement::default());
        player.toggle().ok();
        player.pump();
        // Host paused on its own (e.g. a media key)
        player.element_mut().events.push(MediaEvent::Paused);
        player.pump();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_autoplay_once_per_open() {
        let mut player = MusicPlayer::new(RecordingElement::default());
        assert_eq!(player.autoplay().ok(), Some(Some(PlaybackRequest::Play)));
        player.pump();
        assert_eq!(player.autoplay().ok(), Some(None));

        player.stop_for_close();
        assert!(!player.is_playing());
        assert_eq!(player.element().pauses, 1);
        player.pump();
        assert_eq!(player.autoplay().ok(), Some(Some(PlaybackRequest::Play)));
    }

    #[test]
    fn test_track_blocks_play_before_gesture() {
        let mut player = MusicPlayer::new(track(true));
        let err = player.autoplay().err();
        assert!(matches!(err, Some(PlaybackError::NotAllowed)));
        assert!(!player.is_playing());

        player.element_mut().notify_gesture();
        assert_eq!(player.toggle().ok(), Some(PlaybackRequest::Play));
        player.pump();
        assert!(player.is_playing());
    }

    #[test]
    fn test_track_reports_missing_asset() {
        let mut track = track(false);
        track.notify_gesture();
        let err = track.play().err();
        assert!(matches!(err, Some(PlaybackError::MissingAsset(_))));
        assert_eq!(err.map(|e| e.short()), Some("song file missing"));
    }

    #[test]
    fn test_track_playhead_loops() {
        let mut track = track(true);
        track.advance(Duration::from_secs(3));
        assert_eq!(track.position(), Duration::ZERO, "Paused track does not move");

        track.notify_gesture();
        track.play().ok();
        track.advance(Duration::from_secs(25));
        assert_eq!(track.position(), Duration::from_secs(5));
        assert_eq!(track.loops(), 2);

        track.pause();
        assert_eq!(track.drain_events(), vec![MediaEvent::Played, MediaEvent::Paused]);
        assert!(track.drain_events().is_empty());
    }

    #[test]
    fn test_new_checks_the_file() {
        let track = LoopingTrack::new("does/not/exist.mp3", Duration::from_secs(1));
        assert_eq!(track.path(), Path::new("does/not/exist.mp3"));
        let mut track = track;
        track.notify_gesture();
        assert!(matches!(track.play(), Err(PlaybackError::MissingAsset(_))));
    }
}
