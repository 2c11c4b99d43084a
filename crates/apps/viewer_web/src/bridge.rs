//! Adapters between the JS mapping SDK and the viewer's Rust traits.
//!
//! The JS shell registers four callbacks: `fly_to(poseJson, speedFactor,
//! easing)` returning a Promise that resolves when the camera settles,
//! `set_interaction_enabled(bool)`, `notify(message, durationMs)` where a
//! null duration means sticky and a null message dismisses the sticky
//! notice, and `add_scene_layer(layerJson)`.

use foundation::Notifier;
use js_sys::{Function, Promise};
use scene::{CameraPose, FlightOptions, SceneHost, SceneHostError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Callbacks registered by the JS shell.
#[derive(Clone)]
pub struct HostHooks {
    pub fly_to: Function,
    pub set_interaction: Function,
    pub notify: Function,
    pub add_scene_layer: Function,
}

fn js_error_string(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `SceneHost` backed by the registered JS callbacks.
///
/// The current pose is mirrored from JS via `report_camera`; flights go
/// out through `fly_to` and are awaited as Promises.
pub struct JsSceneHost {
    hooks: Option<HostHooks>,
    pose: CameraPose,
}

impl JsSceneHost {
    pub fn new(hooks: Option<HostHooks>, pose: CameraPose) -> Self {
        Self { hooks, pose }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }
}

impl SceneHost for JsSceneHost {
    fn current_pose(&self) -> CameraPose {
        self.pose
    }

    async fn animate_to(
        &mut self,
        pose: CameraPose,
        options: FlightOptions,
    ) -> Result<(), SceneHostError> {
        let Some(hooks) = &self.hooks else {
            return Err(SceneHostError::AnimationFailed(
                "no scene host registered".to_string(),
            ));
        };
        let pose_json = serde_json::to_string(&pose)
            .map_err(|e| SceneHostError::InvalidPose(e.to_string()))?;
        let value = hooks
            .fly_to
            .call3(
                &JsValue::NULL,
                &JsValue::from_str(&pose_json),
                &JsValue::from_f64(options.speed_factor),
                &JsValue::from_str(options.easing.as_str()),
            )
            .map_err(|e| SceneHostError::AnimationFailed(js_error_string(e)))?;
        let promise: Promise = value
            .dyn_into()
            .map_err(|_| SceneHostError::AnimationFailed("fly_to did not return a Promise".to_string()))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| SceneHostError::AnimationFailed(js_error_string(e)))?;
        self.pose = pose;
        Ok(())
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        if let Some(hooks) = &self.hooks {
            let _ = hooks
                .set_interaction
                .call1(&JsValue::NULL, &JsValue::from_bool(enabled));
        }
    }
}

/// `Notifier` that forwards to the JS shell, falling back to the console
/// before a host is registered.
pub struct JsNotifier {
    notify: Option<Function>,
}

impl JsNotifier {
    pub fn new(notify: Option<Function>) -> Self {
        Self { notify }
    }

    fn call(&self, message: &JsValue, duration: &JsValue) {
        match &self.notify {
            Some(f) => {
                let _ = f.call2(&JsValue::NULL, message, duration);
            }
            None => web_sys::console::log_1(message),
        }
    }
}

impl Notifier for JsNotifier {
    fn show_for(&mut self, message: &str, duration_ms: u32) {
        self.call(
            &JsValue::from_str(message),
            &JsValue::from_f64(duration_ms as f64),
        );
    }

    fn show_sticky(&mut self, message: &str) {
        self.call(&JsValue::from_str(message), &JsValue::NULL);
    }

    fn dismiss_sticky(&mut self) {
        self.call(&JsValue::NULL, &JsValue::NULL);
    }
}
