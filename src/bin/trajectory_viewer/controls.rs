use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{ANGLE_RANGE_DEG, HEIGHT_RANGE_M, VELOCITY_RANGE_MPS};
use crate::state::ViewerState;

const BODY_KEYS: [KeyCode; 8] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
];

pub(crate) fn apply_hotkeys(state: &mut ViewerState) {
    for (idx, key) in BODY_KEYS.iter().enumerate() {
        if is_key_pressed(*key) {
            state.select_ordinal(idx as i64 + 1);
        }
    }
    if is_key_pressed(KeyCode::RightBracket) {
        state.step_body(true);
    }
    if is_key_pressed(KeyCode::LeftBracket) {
        state.step_body(false);
    }
}

pub(crate) fn draw_control_panel(state: &mut ViewerState) {
    widgets::Window::new(hash!(), vec2(18.0, 110.0), vec2(360.0, 330.0))
        .label("Launch")
        .ui(&mut *root_ui(), |ui| {
            ui.label(
                None,
                &format!("Body: {} (g = {:.2} m/s^2)", state.body, state.gravity()),
            );
            if ui.button(None, "Previous body ([)") {
                state.step_body(false);
            }
            if ui.button(None, "Next body (])") {
                state.step_body(true);
            }
            ui.separator();
            ui.slider(hash!(), "Height (m)", HEIGHT_RANGE_M, &mut state.height_m);
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                VELOCITY_RANGE_MPS,
                &mut state.speed_mps,
            );
            ui.slider(hash!(), "Angle (deg)", ANGLE_RANGE_DEG, &mut state.angle_deg);
            ui.separator();
            ui.label(None, "Keys 1-8 select a body directly");
        });
}
