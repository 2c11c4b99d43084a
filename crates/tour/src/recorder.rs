use foundation::Notifier;
use scene::{CameraPose, FlightOptions, SceneHost};
use serde::{Deserialize, Serialize};

use crate::path::TourPath;
use crate::playback::{CancelToken, PlaybackOutcome, PlaybackPlan};

/// Minimum number of waypoints a path needs before it can play: a path
/// needs a start and an end to have a notion of motion.
pub const MIN_PLAYBACK_WAYPOINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

/// Which commands the host UI should currently offer.
///
/// Derived, never stored: recomputed from the recorder after every
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlStates {
    pub start: bool,
    pub add_waypoint: bool,
    pub stop: bool,
    pub play: bool,
    pub clear: bool,
}

/// Why a playback request was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRejected {
    TooFewWaypoints { have: usize },
    RecordingActive,
    PlaybackActive,
}

impl std::fmt::Display for PlayRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayRejected::TooFewWaypoints { have } => {
                write!(
                    f,
                    "a path needs at least {MIN_PLAYBACK_WAYPOINTS} waypoints, have {have}"
                )
            }
            PlayRejected::RecordingActive => write!(f, "recording is still active"),
            PlayRejected::PlaybackActive => write!(f, "a playback session is already running"),
        }
    }
}

impl std::error::Error for PlayRejected {}

/// Why a saved path could not be loaded into the recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRejected {
    RecordingActive,
    PlaybackActive,
}

impl std::fmt::Display for LoadRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadRejected::RecordingActive => write!(f, "cannot load a path while recording"),
            LoadRejected::PlaybackActive => write!(f, "cannot load a path during playback"),
        }
    }
}

impl std::error::Error for LoadRejected {}

/// Interactive camera-path recorder and player.
///
/// Captures an ordered list of camera poses while recording and replays
/// them as one sequential multi-leg flight. All state is owned here and
/// only ever touched from the UI thread; there is no hidden shared state.
#[derive(Debug, Default)]
pub struct TourRecorder {
    state: RecordingState,
    playing: bool,
    panel_open: bool,
    waypoints: Vec<CameraPose>,
    options: FlightOptions,
}

impl TourRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FlightOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn waypoints(&self) -> &[CameraPose] {
        &self.waypoints
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Toggle the tool panel, returning the new state.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    /// Begin a new recording, discarding any previously captured path.
    ///
    /// A no-op while playback is active: recording and playback are
    /// mutually exclusive.
    pub fn start(&mut self, notifier: &mut impl Notifier) {
        if self.playing {
            notifier.show("Cannot record while a path is playing");
            return;
        }
        self.waypoints.clear();
        self.state = RecordingState::Recording;
        notifier.show("Recording started. Move the view, then add waypoints.");
    }

    /// Capture the host's current camera pose as the next waypoint.
    ///
    /// The pose is taken by value, so later camera movement never alters
    /// it. A no-op when not recording.
    pub fn add_waypoint(&mut self, host: &impl SceneHost, notifier: &mut impl Notifier) {
        if self.state != RecordingState::Recording {
            return;
        }
        self.waypoints.push(host.current_pose());
        notifier.show(&format!("Waypoint {} added", self.waypoints.len()));
    }

    /// End the recording, keeping the captured waypoints.
    ///
    /// A no-op when not recording.
    pub fn stop(&mut self, notifier: &mut impl Notifier) {
        if self.state != RecordingState::Recording {
            return;
        }
        self.state = RecordingState::Idle;
        self.panel_open = false;
        notifier.show(&format!(
            "Recording ended with {} waypoints",
            self.waypoints.len()
        ));
    }

    /// Drop the captured path and return to idle, from any state.
    pub fn clear(&mut self, notifier: &mut impl Notifier) {
        self.state = RecordingState::Idle;
        self.waypoints.clear();
        self.panel_open = false;
        notifier.show("All waypoints cleared");
    }

    /// Derived affordance enablement for the host UI.
    pub fn control_states(&self) -> ControlStates {
        let recording = self.is_recording();
        ControlStates {
            start: !recording && !self.playing,
            add_waypoint: recording,
            stop: recording,
            play: !recording
                && !self.playing
                && self.waypoints.len() >= MIN_PLAYBACK_WAYPOINTS,
            clear: !recording && !self.waypoints.is_empty(),
        }
    }

    /// Accept a playback request and snapshot the path.
    ///
    /// On success the recorder is marked playing and the panel collapses;
    /// the caller must run the returned plan and then call
    /// `finish_playback`. Every rejection surfaces one notifier message
    /// and changes nothing.
    pub fn begin_playback(
        &mut self,
        notifier: &mut impl Notifier,
    ) -> Result<PlaybackPlan, PlayRejected> {
        if self.playing {
            notifier.show("A recorded path is already playing");
            return Err(PlayRejected::PlaybackActive);
        }
        if self.is_recording() {
            notifier.show("Stop recording before playing the path");
            return Err(PlayRejected::RecordingActive);
        }
        if self.waypoints.len() < MIN_PLAYBACK_WAYPOINTS {
            notifier.show("A path needs at least 2 waypoints to play");
            return Err(PlayRejected::TooFewWaypoints {
                have: self.waypoints.len(),
            });
        }
        self.playing = true;
        self.panel_open = false;
        Ok(PlaybackPlan::new(self.waypoints.clone(), self.options))
    }

    /// Mark the playback session finished.
    pub fn finish_playback(&mut self) {
        self.playing = false;
    }

    /// Play the recorded path to completion.
    ///
    /// Convenience for hosts that can hold the recorder across an await;
    /// shells with `thread_local` state use the
    /// `begin_playback`/`PlaybackPlan::run`/`finish_playback` split
    /// instead.
    pub async fn play<H: SceneHost, N: Notifier>(
        &mut self,
        host: &mut H,
        notifier: &mut N,
        cancel: &CancelToken,
    ) -> Result<PlaybackOutcome, PlayRejected> {
        let plan = self.begin_playback(notifier)?;
        let outcome = plan.run(host, notifier, cancel).await;
        self.finish_playback();
        Ok(outcome)
    }

    /// Snapshot the captured path for export.
    pub fn export_path(&self) -> TourPath {
        TourPath::new(self.waypoints.clone())
    }

    /// Replace the captured path with a previously exported one.
    ///
    /// Returns the number of waypoints loaded. Rejected while recording
    /// or playing.
    pub fn load_path(
        &mut self,
        path: TourPath,
        notifier: &mut impl Notifier,
    ) -> Result<usize, LoadRejected> {
        if self.is_recording() {
            return Err(LoadRejected::RecordingActive);
        }
        if self.playing {
            return Err(LoadRejected::PlaybackActive);
        }
        self.waypoints = path.into_waypoints();
        let count = self.waypoints.len();
        notifier.show(&format!("Loaded path with {count} waypoints"));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::{MIN_PLAYBACK_WAYPOINTS, PlayRejected, TourRecorder};
    use crate::path::TourPath;
    use crate::playback::{CancelToken, PlaybackStatus};
    use foundation::NoticeLog;
    use pretty_assertions::assert_eq;
    use scene::{CameraPose, FlightOptions, GeoPosition, SceneHost, SceneHostError};
    use std::cell::Cell;

    /// Host whose camera can be moved between captures and whose flights
    /// settle immediately.
    struct LiveHost {
        pose: Cell<CameraPose>,
        flights: Vec<CameraPose>,
        interaction: Vec<bool>,
    }

    impl LiveHost {
        fn new() -> Self {
            Self {
                pose: Cell::new(CameraPose::overhead(121.05, 24.9, 3500.0)),
                flights: Vec::new(),
                interaction: Vec::new(),
            }
        }

        fn move_camera(&self, z_m: f64) {
            let mut pose = self.pose.get();
            pose.position.z_m = z_m;
            self.pose.set(pose);
        }
    }

    impl SceneHost for LiveHost {
        fn current_pose(&self) -> CameraPose {
            self.pose.get()
        }

        async fn animate_to(
            &mut self,
            pose: CameraPose,
            _options: FlightOptions,
        ) -> Result<(), SceneHostError> {
            self.flights.push(pose);
            self.pose.set(pose);
            Ok(())
        }

        fn set_interaction_enabled(&mut self, enabled: bool) {
            self.interaction.push(enabled);
        }
    }

    #[test]
    fn start_and_clear_reset_the_path() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        rec.add_waypoint(&host, &mut log);
        rec.add_waypoint(&host, &mut log);
        assert_eq!(rec.waypoint_count(), 2);

        rec.start(&mut log);
        assert_eq!(rec.waypoint_count(), 0);

        rec.add_waypoint(&host, &mut log);
        rec.clear(&mut log);
        assert_eq!(rec.waypoint_count(), 0);
        assert!(!rec.is_recording());
    }

    #[test]
    fn add_waypoint_is_a_noop_while_idle() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.add_waypoint(&host, &mut log);
        assert_eq!(rec.waypoint_count(), 0);
        assert!(log.notices().is_empty());
    }

    #[test]
    fn waypoints_keep_capture_order_and_count() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        for z in [1000.0, 2000.0, 3000.0] {
            host.move_camera(z);
            rec.add_waypoint(&host, &mut log);
        }
        assert_eq!(rec.waypoint_count(), 3);
        let heights: Vec<f64> = rec.waypoints().iter().map(|w| w.position.z_m).collect();
        assert_eq!(heights, vec![1000.0, 2000.0, 3000.0]);
    }

    #[test]
    fn captured_waypoints_are_copies_not_references() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        host.move_camera(1234.0);
        rec.add_waypoint(&host, &mut log);
        host.move_camera(9.0);

        assert_eq!(rec.waypoints()[0].position.z_m, 1234.0);
    }

    #[test]
    fn record_two_then_stop_keeps_the_path() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        rec.add_waypoint(&host, &mut log);
        rec.add_waypoint(&host, &mut log);
        rec.stop(&mut log);

        assert_eq!(rec.waypoint_count(), 2);
        assert!(!rec.is_recording());
        assert!(
            log.notices()
                .last()
                .is_some_and(|n| n.message.contains("2 waypoints"))
        );
    }

    #[test]
    fn play_on_a_fresh_recorder_is_rejected_without_host_calls() {
        let mut rec = TourRecorder::new();
        let mut host = LiveHost::new();
        let mut log = NoticeLog::new();
        let cancel = CancelToken::new();

        let result = pollster::block_on(rec.play(&mut host, &mut log, &cancel));

        assert_eq!(result, Err(PlayRejected::TooFewWaypoints { have: 0 }));
        assert!(host.flights.is_empty());
        assert!(host.interaction.is_empty());
        assert_eq!(log.notices().len(), 1);
        assert!(!rec.is_playing());
    }

    #[test]
    fn play_flies_each_waypoint_in_capture_order() {
        let mut rec = TourRecorder::new();
        let mut host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        for z in [500.0, 1500.0, 2500.0] {
            host.move_camera(z);
            rec.add_waypoint(&host, &mut log);
        }
        rec.stop(&mut log);

        let outcome = pollster::block_on(rec.play(&mut host, &mut log, &CancelToken::new()))
            .expect("playback accepted");

        assert_eq!(outcome.status, PlaybackStatus::Completed);
        assert_eq!(host.flights.len(), 3);
        let heights: Vec<f64> = host.flights.iter().map(|p| p.position.z_m).collect();
        assert_eq!(heights, vec![500.0, 1500.0, 2500.0]);
        assert_eq!(host.interaction, vec![false, true]);
        assert!(!rec.is_playing());
    }

    #[test]
    fn control_states_follow_the_state_machine() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        let idle = rec.control_states();
        assert!(idle.start);
        assert!(!idle.add_waypoint && !idle.stop);
        assert!(!idle.play && !idle.clear);

        rec.start(&mut log);
        let recording = rec.control_states();
        assert!(!recording.start);
        assert!(recording.add_waypoint && recording.stop);
        assert!(!recording.play && !recording.clear);

        rec.add_waypoint(&host, &mut log);
        rec.add_waypoint(&host, &mut log);
        rec.stop(&mut log);
        let ready = rec.control_states();
        assert!(ready.start && ready.play && ready.clear);
        assert!(!ready.add_waypoint && !ready.stop);
    }

    #[test]
    fn stop_and_clear_collapse_the_panel() {
        let mut rec = TourRecorder::new();
        let mut log = NoticeLog::new();

        assert!(rec.toggle_panel());
        rec.start(&mut log);
        rec.stop(&mut log);
        assert!(!rec.panel_open());

        rec.toggle_panel();
        rec.clear(&mut log);
        assert!(!rec.panel_open());
    }

    #[test]
    fn begin_playback_rejects_while_recording() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        rec.add_waypoint(&host, &mut log);
        rec.add_waypoint(&host, &mut log);
        log.drain();

        assert_eq!(
            rec.begin_playback(&mut log).unwrap_err(),
            PlayRejected::RecordingActive
        );
        assert_eq!(rec.waypoint_count(), 2);
        let notices = log.drain();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.contains("recording"));
    }

    #[test]
    fn second_play_request_is_rejected_with_a_notice() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        rec.add_waypoint(&host, &mut log);
        rec.add_waypoint(&host, &mut log);
        rec.stop(&mut log);

        let _plan = rec.begin_playback(&mut log).expect("accepted");
        log.drain();

        assert_eq!(
            rec.begin_playback(&mut log).unwrap_err(),
            PlayRejected::PlaybackActive
        );
        let notices = log.drain();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.contains("already playing"));
    }

    #[test]
    fn start_is_refused_during_playback() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        rec.add_waypoint(&host, &mut log);
        rec.add_waypoint(&host, &mut log);
        rec.stop(&mut log);

        let _plan = rec.begin_playback(&mut log).expect("accepted");
        rec.start(&mut log);
        assert!(!rec.is_recording());
        assert_eq!(rec.waypoint_count(), 2, "path must survive the refusal");
        rec.finish_playback();

        rec.start(&mut log);
        assert!(rec.is_recording());
    }

    #[test]
    fn minimum_is_two_waypoints() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        rec.add_waypoint(&host, &mut log);
        rec.stop(&mut log);

        assert_eq!(
            rec.begin_playback(&mut log).unwrap_err(),
            PlayRejected::TooFewWaypoints { have: 1 }
        );
        assert_eq!(MIN_PLAYBACK_WAYPOINTS, 2);
    }

    #[test]
    fn export_and_load_round_trip() {
        let mut rec = TourRecorder::new();
        let host = LiveHost::new();
        let mut log = NoticeLog::new();

        rec.start(&mut log);
        host.move_camera(750.0);
        rec.add_waypoint(&host, &mut log);
        host.move_camera(1250.0);
        rec.add_waypoint(&host, &mut log);
        rec.stop(&mut log);

        let exported = rec.export_path();
        rec.clear(&mut log);
        assert_eq!(rec.waypoint_count(), 0);

        let loaded = rec.load_path(exported, &mut log).expect("load accepted");
        assert_eq!(loaded, 2);
        assert_eq!(rec.waypoints()[1].position.z_m, 1250.0);
    }

    #[test]
    fn load_is_rejected_while_recording() {
        let mut rec = TourRecorder::new();
        let mut log = NoticeLog::new();
        rec.start(&mut log);

        let path = TourPath::new(vec![CameraPose::new(
            GeoPosition::new(121.0, 24.9, 100.0),
            0.0,
            0.0,
        )]);
        assert!(rec.load_path(path, &mut log).is_err());
        assert_eq!(rec.waypoint_count(), 0);
    }
}
