use macroquad::prelude::*;

use projectile_motion::TrajectoryResult;
use projectile_motion::core::window::AxisWindow;
use projectile_motion::plot::{PLOT_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};

use crate::constants::{APEX_COLOR, GRID_COLOR, PATH_COLOR, TITLE_Y, X_GRID_LINES, Y_GRID_LINES};

/// Screen-space rectangle the chart is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn world_to_screen(&self, window: AxisWindow, x: f64, y: f64) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let sx = self.left + (x / window.x_max) as f32 * plot_w;
        let sy = self.bottom - (y / window.y_max) as f32 * plot_h;
        vec2(sx, sy)
    }
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_title(area: PlotArea, font: Option<&Font>) {
    let size = measure_text(PLOT_TITLE, font, 34, 1.0);
    let x = area.left + ((area.right - area.left) - size.width) * 0.5;
    draw_ui_text(
        PLOT_TITLE,
        x,
        TITLE_Y,
        34,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
}

pub(crate) fn draw_grid(area: PlotArea) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, GRID_COLOR);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(area: PlotArea, window: AxisWindow, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let x = area.left + t as f32 * (area.right - area.left);
        let label = format_axis_value(t * window.x_max, window.x_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let y = area.bottom - t as f32 * (area.bottom - area.top);
        let label = format_axis_value(t * window.y_max, window.y_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    let x_desc = measure_text(X_AXIS_LABEL, font, 18, 1.0);
    draw_ui_text(
        X_AXIS_LABEL,
        area.right - x_desc.width,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        Y_AXIS_LABEL,
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_trajectory(
    result: &TrajectoryResult,
    area: PlotArea,
    window: AxisWindow,
    thickness: f32,
) {
    let mut points = result
        .samples
        .iter()
        .map(|s| area.world_to_screen(window, s.x, s.y));
    let Some(mut prev) = points.next() else {
        return;
    };
    draw_circle(prev.x, prev.y, 5.0, PATH_COLOR);
    for cur in points {
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, PATH_COLOR);
        prev = cur;
    }

    let apex = area.world_to_screen(window, result.horizontal_reach * 0.5, result.max_height);
    draw_circle(apex.x, apex.y, 5.0, APEX_COLOR);
}

pub(crate) fn draw_metrics(
    result: &TrajectoryResult,
    area: PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_ui_text(
        &format!(
            "Time of flight: {:.4} s | Maximum height: {:.4} m | Horizontal reach: {:.4} m",
            result.time_of_flight, result.max_height, result.horizontal_reach
        ),
        area.left,
        screen_h - 40.0,
        22,
        BLUE,
        font,
    );
    if result.time_of_flight == 0.0 {
        draw_ui_text(
            "No vertical launch velocity: the path collapses to the launch point",
            area.left,
            screen_h - 14.0,
            18,
            DARKGRAY,
            font,
        );
    }
}

pub(crate) fn draw_error(message: &str, area: PlotArea, screen_h: f32, font: Option<&Font>) {
    draw_ui_text(message, area.left, screen_h - 40.0, 22, RED, font);
}
