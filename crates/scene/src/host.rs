use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

/// Easing curve applied to a camera transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Wire name understood by the JS mapping SDK.
    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Options for one animated camera transition.
///
/// The defaults are a constant, moderate speed factor and a linear curve so
/// a recorded path plays back at a uniform pace regardless of leg length.
/// They are deliberately fixed, not distance-adaptive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightOptions {
    pub speed_factor: f64,
    pub easing: Easing,
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            speed_factor: 0.5,
            easing: Easing::Linear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneHostError {
    /// The destination pose was rejected by the scene.
    InvalidPose(String),
    /// The transition started but did not settle.
    AnimationFailed(String),
}

impl std::fmt::Display for SceneHostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneHostError::InvalidPose(msg) => write!(f, "invalid camera pose: {msg}"),
            SceneHostError::AnimationFailed(msg) => write!(f, "camera animation failed: {msg}"),
        }
    }
}

impl std::error::Error for SceneHostError {}

/// The external 3D view/camera system the tour components drive.
///
/// `animate_to` resolves only once the transition has fully settled; the
/// caller is expected to await it before issuing the next transition.
pub trait SceneHost {
    /// Current camera pose as an independent copy.
    fn current_pose(&self) -> CameraPose;

    /// Animate the camera to `pose` and resolve when the motion settles.
    fn animate_to(
        &mut self,
        pose: CameraPose,
        options: FlightOptions,
    ) -> impl Future<Output = Result<(), SceneHostError>>;

    /// Enable or disable general scene interaction (pointer/keyboard UI).
    fn set_interaction_enabled(&mut self, enabled: bool);
}
