use std::cell::Cell;
use std::rc::Rc;

use foundation::Notifier;
use scene::{CameraPose, FlightOptions, SceneHost, SceneHostError};

/// Cooperative cancellation for an in-flight playback.
///
/// Cloned by the host UI and checked between legs only: a leg that has
/// started always settles before playback stops. Single-threaded by
/// design, like the rest of the viewer state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Re-arm the token for the next playback session.
    pub fn reset(&self) {
        self.0.set(false);
    }
}

/// How a playback session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackStatus {
    /// Every leg flew to completion.
    Completed,
    /// Cancelled between legs.
    Cancelled,
    /// A leg failed; the remaining legs were abandoned.
    Failed(SceneHostError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackOutcome {
    pub legs_flown: usize,
    pub status: PlaybackStatus,
}

/// An accepted playback session: a snapshot of the recorded path plus the
/// flight options to fly it with.
///
/// The snapshot is taken when playback is accepted, so clearing or
/// re-recording the path mid-flight cannot disturb a running session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackPlan {
    waypoints: Vec<CameraPose>,
    options: FlightOptions,
}

impl PlaybackPlan {
    pub(crate) fn new(waypoints: Vec<CameraPose>, options: FlightOptions) -> Self {
        Self { waypoints, options }
    }

    /// One leg per waypoint, flown in recorded order.
    pub fn leg_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn waypoints(&self) -> &[CameraPose] {
        &self.waypoints
    }

    /// Fly the recorded path as a strictly sequential animation.
    ///
    /// Scene interaction is disabled before the first leg and re-enabled
    /// after the loop exits, on every path out: completion, cancellation,
    /// and host failure alike. Each leg is awaited to full settlement
    /// before the next is issued; legs never overlap.
    pub async fn run<H: SceneHost, N: Notifier>(
        &self,
        host: &mut H,
        notifier: &mut N,
        cancel: &CancelToken,
    ) -> PlaybackOutcome {
        host.set_interaction_enabled(false);
        notifier.show_sticky("Playing recorded path...");

        let mut legs_flown = 0;
        let mut status = PlaybackStatus::Completed;
        for pose in &self.waypoints {
            if cancel.is_cancelled() {
                status = PlaybackStatus::Cancelled;
                break;
            }
            match host.animate_to(*pose, self.options).await {
                Ok(()) => legs_flown += 1,
                Err(err) => {
                    status = PlaybackStatus::Failed(err);
                    break;
                }
            }
        }

        notifier.dismiss_sticky();
        host.set_interaction_enabled(true);

        match &status {
            PlaybackStatus::Completed => {}
            PlaybackStatus::Cancelled => notifier.show("Playback cancelled"),
            PlaybackStatus::Failed(err) => notifier.show(&format!("Playback aborted: {err}")),
        }

        PlaybackOutcome { legs_flown, status }
    }
}

#[cfg(test)]
mod tests {
    use super::{CancelToken, PlaybackPlan, PlaybackStatus};
    use foundation::NoticeLog;
    use pretty_assertions::assert_eq;
    use scene::{CameraPose, FlightOptions, SceneHost, SceneHostError};
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Completes on the second poll, so sequential awaiting is actually
    /// exercised instead of resolving synchronously.
    struct SettleLater(bool);

    impl Future for SettleLater {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[derive(Default)]
    struct ScriptedHost {
        flights: Vec<CameraPose>,
        interaction: Vec<bool>,
        /// Legs (0-based) that should fail.
        fail_legs: Vec<usize>,
        in_flight: bool,
    }

    impl SceneHost for ScriptedHost {
        fn current_pose(&self) -> CameraPose {
            CameraPose::overhead(121.0, 24.9, 1000.0)
        }

        async fn animate_to(
            &mut self,
            pose: CameraPose,
            _options: FlightOptions,
        ) -> Result<(), SceneHostError> {
            assert!(!self.in_flight, "legs must never overlap");
            self.in_flight = true;
            SettleLater(false).await;
            self.in_flight = false;

            let leg = self.flights.len();
            self.flights.push(pose);
            if self.fail_legs.contains(&leg) {
                return Err(SceneHostError::AnimationFailed("scripted".to_string()));
            }
            Ok(())
        }

        fn set_interaction_enabled(&mut self, enabled: bool) {
            self.interaction.push(enabled);
        }
    }

    fn pose(z_m: f64) -> CameraPose {
        CameraPose::overhead(121.05, 24.9, z_m)
    }

    fn plan(poses: &[CameraPose]) -> PlaybackPlan {
        PlaybackPlan::new(poses.to_vec(), FlightOptions::default())
    }

    #[test]
    fn flies_every_leg_in_recorded_order() {
        let poses = vec![pose(100.0), pose(200.0), pose(300.0)];
        let mut host = ScriptedHost::default();
        let mut log = NoticeLog::new();

        let outcome = pollster::block_on(plan(&poses).run(
            &mut host,
            &mut log,
            &CancelToken::new(),
        ));

        assert_eq!(outcome.status, PlaybackStatus::Completed);
        assert_eq!(outcome.legs_flown, 3);
        assert_eq!(host.flights, poses);
    }

    #[test]
    fn interaction_is_disabled_then_reenabled_exactly_once() {
        let poses = vec![pose(100.0), pose(200.0)];
        let mut host = ScriptedHost::default();
        let mut log = NoticeLog::new();

        pollster::block_on(plan(&poses).run(&mut host, &mut log, &CancelToken::new()));

        assert_eq!(host.interaction, vec![false, true]);
        assert_eq!(log.sticky(), None, "sticky notice must be dismissed");
    }

    #[test]
    fn host_failure_aborts_remaining_legs_but_cleanup_runs() {
        let poses = vec![pose(100.0), pose(200.0), pose(300.0)];
        let mut host = ScriptedHost {
            fail_legs: vec![1],
            ..ScriptedHost::default()
        };
        let mut log = NoticeLog::new();

        let outcome = pollster::block_on(plan(&poses).run(
            &mut host,
            &mut log,
            &CancelToken::new(),
        ));

        assert_eq!(outcome.legs_flown, 1);
        assert!(matches!(outcome.status, PlaybackStatus::Failed(_)));
        // Leg 3 never started.
        assert_eq!(host.flights.len(), 2);
        assert_eq!(host.interaction, vec![false, true]);
        let aborted: Vec<_> = log
            .notices()
            .iter()
            .filter(|n| n.message.starts_with("Playback aborted"))
            .collect();
        assert_eq!(aborted.len(), 1);
    }

    #[test]
    fn cancel_between_legs_stops_before_the_next_leg() {
        struct CancellingHost {
            inner: ScriptedHost,
            cancel: CancelToken,
            cancel_after_leg: usize,
        }

        impl SceneHost for CancellingHost {
            fn current_pose(&self) -> CameraPose {
                self.inner.current_pose()
            }

            async fn animate_to(
                &mut self,
                pose: CameraPose,
                options: FlightOptions,
            ) -> Result<(), SceneHostError> {
                self.inner.animate_to(pose, options).await?;
                if self.inner.flights.len() == self.cancel_after_leg {
                    self.cancel.cancel();
                }
                Ok(())
            }

            fn set_interaction_enabled(&mut self, enabled: bool) {
                self.inner.set_interaction_enabled(enabled);
            }
        }

        let poses = vec![pose(100.0), pose(200.0), pose(300.0)];
        let cancel = CancelToken::new();
        let mut host = CancellingHost {
            inner: ScriptedHost::default(),
            cancel: cancel.clone(),
            cancel_after_leg: 1,
        };
        let mut log = NoticeLog::new();

        let outcome = pollster::block_on(plan(&poses).run(&mut host, &mut log, &cancel));

        assert_eq!(outcome.status, PlaybackStatus::Cancelled);
        assert_eq!(outcome.legs_flown, 1);
        assert_eq!(host.inner.flights.len(), 1);
        assert_eq!(host.inner.interaction, vec![false, true]);
    }

    #[test]
    fn cancel_token_can_be_rearmed() {
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(cancel.is_cancelled());
        cancel.reset();
        assert!(!cancel.is_cancelled());
    }
}
