use macroquad::prelude::*;

use projectile_motion::core::window::trajectory_window;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, DISTANCE_TO_HEIGHT_RATIO, INITIAL_WINDOW_HEIGHT,
    INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{apply_hotkeys, draw_control_panel};
use crate::render::{
    PlotArea, draw_axis_tick_labels, draw_error, draw_grid, draw_metrics, draw_title,
    draw_trajectory,
};
use crate::state::ViewerState;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion Viewer".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!("could not load '{UI_FONT_PATH}': {err}; falling back to default font");
            None
        }
    };

    let mut state = ViewerState::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        apply_hotkeys(&mut state);

        clear_background(BACKGROUND);
        draw_title(area, ui_font.as_ref());

        match state.trajectory() {
            Ok(result) => {
                let window = trajectory_window([result], Some(DISTANCE_TO_HEIGHT_RATIO));
                draw_grid(area);
                draw_axis_tick_labels(area, window, ui_font.as_ref());
                draw_trajectory(result, area, window, 3.0);
                draw_metrics(result, area, screen_h, ui_font.as_ref());
            }
            Err(err) => {
                draw_grid(area);
                draw_error(&err.to_string(), area, screen_h, ui_font.as_ref());
            }
        }

        draw_control_panel(&mut state);

        next_frame().await;
    }
}
