use std::cell::RefCell;

use console_error_panic_hook::set_once;
use gloo_net::http::Request;
use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use catalog::SceneLayerDef;
use foundation::Notifier;
use scene::{
    BasemapId, BasemapState, CameraPose, DEFAULT_EXAGGERATION, GeoPosition, MAX_EXAGGERATION,
    MIN_EXAGGERATION, MeasureTools, MeasurementKind, SceneConfig,
};
use tour::{CancelToken, TourRecorder};

mod bridge;
mod storage;

use bridge::{HostHooks, JsNotifier, JsSceneHost};

struct ViewerState {
    config: SceneConfig,
    basemap: BasemapState,
    measure: MeasureTools,
    exaggeration: f64,
    /// Latest camera pose mirrored from the JS scene view.
    camera: CameraPose,
    recorder: TourRecorder,
    cancel: CancelToken,
    hooks: Option<HostHooks>,
}

thread_local! {
    static STATE: RefCell<ViewerState> = RefCell::new({
        let config = SceneConfig::hukou_service_area();
        ViewerState {
            basemap: BasemapState::new(config.basemap),
            camera: config.initial_camera,
            config,
            measure: MeasureTools::new(),
            exaggeration: DEFAULT_EXAGGERATION,
            recorder: TourRecorder::new(),
            cancel: CancelToken::new(),
            hooks: None,
        }
    });
}

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

fn notifier_of(state: &ViewerState) -> JsNotifier {
    JsNotifier::new(state.hooks.as_ref().map(|h| h.notify.clone()))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Register the callbacks the shell needs from the JS mapping SDK.
#[wasm_bindgen]
pub fn register_host(
    fly_to: Function,
    set_interaction: Function,
    notify: Function,
    add_scene_layer: Function,
) {
    STATE.with(|s| {
        s.borrow_mut().hooks = Some(HostHooks {
            fly_to,
            set_interaction,
            notify,
            add_scene_layer,
        });
    });
}

/// Mirror the live camera pose from the JS scene view.
#[wasm_bindgen]
pub fn report_camera(lon_deg: f64, lat_deg: f64, z_m: f64, heading_deg: f64, tilt_deg: f64) {
    STATE.with(|s| {
        s.borrow_mut().camera = CameraPose::new(
            GeoPosition::new(lon_deg, lat_deg, z_m),
            heading_deg,
            tilt_deg,
        );
    });
}

#[wasm_bindgen]
pub fn scene_config_json() -> Result<String, JsValue> {
    STATE.with(|s| {
        serde_json::to_string(&s.borrow().config).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// The declarative layer catalog in scene stacking order.
#[wasm_bindgen]
pub fn catalog_json() -> Result<String, JsValue> {
    serde_json::to_string(&catalog::map_layers()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn set_basemap(id: &str) -> Result<f64, JsValue> {
    let Some(id) = BasemapId::GALLERY.into_iter().find(|b| b.as_str() == id) else {
        return Err(JsValue::from_str(&format!("unknown basemap: {id}")));
    };
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        st.basemap.set_basemap(id);
        // The opacity is the viewer's, not the basemap's; JS reapplies it
        // to the new base layers.
        Ok(st.basemap.opacity)
    })
}

#[wasm_bindgen]
pub fn set_basemap_opacity(opacity: f64) -> f64 {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        st.basemap.set_opacity(opacity);
        st.basemap.opacity
    })
}

/// Activate a measurement widget. Returns the previously active kind, so
/// the JS side can clear it, or null.
#[wasm_bindgen]
pub fn measure_activate(kind: &str) -> Result<JsValue, JsValue> {
    let kind = match kind {
        "distance" => MeasurementKind::Distance,
        "area" => MeasurementKind::Area,
        other => return Err(JsValue::from_str(&format!("unknown measurement: {other}"))),
    };
    STATE.with(|s| {
        let previous = s.borrow_mut().measure.activate(kind);
        Ok(match previous {
            Some(MeasurementKind::Distance) => JsValue::from_str("distance"),
            Some(MeasurementKind::Area) => JsValue::from_str("area"),
            None => JsValue::NULL,
        })
    })
}

#[wasm_bindgen]
pub fn measure_clear() {
    STATE.with(|s| s.borrow_mut().measure.clear());
}

/// Set the terrain exaggeration factor, returning the clamped value. The
/// JS shell rebuilds the ground from `ground_json` afterwards.
#[wasm_bindgen]
pub fn set_terrain_exaggeration(value: f64) -> f64 {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        st.exaggeration = value.clamp(MIN_EXAGGERATION, MAX_EXAGGERATION);
        st.exaggeration
    })
}

/// The elevation ground layer with the current exaggeration applied.
#[wasm_bindgen]
pub fn ground_json() -> Result<String, JsValue> {
    STATE.with(|s| {
        serde_json::to_string(&catalog::ground_layer(s.borrow().exaggeration))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

#[wasm_bindgen]
pub fn tour_toggle_panel() -> bool {
    STATE.with(|s| s.borrow_mut().recorder.toggle_panel())
}

#[wasm_bindgen]
pub fn tour_start() {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        let mut notifier = notifier_of(&st);
        st.recorder.start(&mut notifier);
    });
}

#[wasm_bindgen]
pub fn tour_add_waypoint() {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        let mut notifier = notifier_of(&st);
        let probe = JsSceneHost::new(None, st.camera);
        st.recorder.add_waypoint(&probe, &mut notifier);
    });
}

#[wasm_bindgen]
pub fn tour_stop() {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        let mut notifier = notifier_of(&st);
        st.recorder.stop(&mut notifier);
    });
}

#[wasm_bindgen]
pub fn tour_clear() {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        let mut notifier = notifier_of(&st);
        st.recorder.clear(&mut notifier);
    });
}

/// Derived button enablement as JSON, recomputed on demand.
#[wasm_bindgen]
pub fn tour_control_states() -> Result<String, JsValue> {
    STATE.with(|s| {
        serde_json::to_string(&s.borrow().recorder.control_states())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Play the recorded path.
///
/// The playback plan is snapshotted under the state borrow, flown without
/// it (a `thread_local` borrow cannot be held across an await), and the
/// playing flag cleared once the flight settles.
#[wasm_bindgen]
pub fn tour_play() {
    spawn_local(async move {
        let begun = STATE.with(|s| {
            let mut st = s.borrow_mut();
            let mut notifier = notifier_of(&st);
            match st.recorder.begin_playback(&mut notifier) {
                Ok(plan) => {
                    st.cancel.reset();
                    Some((plan, st.hooks.clone(), st.camera, st.cancel.clone()))
                }
                Err(err) => {
                    log(&format!("playback rejected: {err}"));
                    None
                }
            }
        });
        let Some((plan, hooks, camera, cancel)) = begun else {
            return;
        };

        let mut host = JsSceneHost::new(hooks.clone(), camera);
        let mut notifier = JsNotifier::new(hooks.map(|h| h.notify));
        let outcome = plan.run(&mut host, &mut notifier, &cancel).await;
        let final_pose = host.pose();

        STATE.with(|s| {
            let mut st = s.borrow_mut();
            st.recorder.finish_playback();
            st.camera = final_pose;
        });
        log(&format!(
            "playback finished: {} of {} legs",
            outcome.legs_flown,
            plan.leg_count()
        ));
    });
}

/// Request cancellation of the running playback; takes effect at the next
/// leg boundary.
#[wasm_bindgen]
pub fn tour_cancel() {
    STATE.with(|s| s.borrow().cancel.cancel());
}

#[wasm_bindgen]
pub fn save_tour_path() -> Result<(), JsValue> {
    STATE.with(|s| {
        let st = s.borrow();
        let path = st.recorder.export_path();
        storage::save_path(&path).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut notifier = notifier_of(&st);
        notifier.show(&format!("Saved path with {} waypoints", path.len()));
        Ok(())
    })
}

/// Load the saved path into the recorder. Returns the waypoint count, or
/// 0 when nothing is saved.
#[wasm_bindgen]
pub fn load_tour_path() -> Result<u32, JsValue> {
    STATE.with(|s| {
        let mut st = s.borrow_mut();
        let mut notifier = notifier_of(&st);
        let Some(path) =
            storage::load_path().map_err(|e| JsValue::from_str(&e.to_string()))?
        else {
            notifier.show("No saved path");
            return Ok(0);
        };
        let count = st
            .recorder
            .load_path(path, &mut notifier)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(count as u32)
    })
}

/// Remove the saved path from browser storage. The recorder's in-memory
/// path is untouched.
#[wasm_bindgen]
pub fn clear_tour_path() -> Result<(), JsValue> {
    STATE.with(|s| {
        let st = s.borrow();
        storage::clear_path().map_err(|e| JsValue::from_str(&e.to_string()))?;
        notifier_of(&st).show("Saved path removed");
        Ok(())
    })
}

/// Probe the 3D building services and hand the available ones to the JS
/// shell. A missing county service is reported and skipped; it never
/// blocks the others.
#[wasm_bindgen]
pub fn load_building_layers() {
    spawn_local(async move {
        for layer in catalog::building_layers() {
            match probe_service(&layer.url).await {
                Ok(()) => add_scene_layer(&layer),
                Err(err) => {
                    log(&format!("{} unavailable: {err}", layer.title));
                    STATE.with(|s| {
                        let st = s.borrow();
                        notifier_of(&st).show(&format!("{} failed to load", layer.title));
                    });
                }
            }
        }
    });
}

async fn probe_service(url: &str) -> Result<(), String> {
    let resp = Request::get(&format!("{url}?f=json"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

fn add_scene_layer(layer: &SceneLayerDef) {
    let json = match serde_json::to_string(layer) {
        Ok(json) => json,
        Err(err) => {
            log(&format!("scene layer encode failed: {err}"));
            return;
        }
    };
    STATE.with(|s| {
        let st = s.borrow();
        if let Some(hooks) = &st.hooks {
            let _ = hooks
                .add_scene_layer
                .call1(&JsValue::NULL, &JsValue::from_str(&json));
        }
    });
}
