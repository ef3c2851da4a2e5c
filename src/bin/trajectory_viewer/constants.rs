use std::ops::Range;

use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 120.0;

pub const TITLE_Y: f32 = 52.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0;

pub const HEIGHT_RANGE_M: Range<f32> = 0.0..200.0;
pub const VELOCITY_RANGE_MPS: Range<f32> = 0.0..150.0;
pub const ANGLE_RANGE_DEG: Range<f32> = 0.0..90.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const PATH_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const APEX_COLOR: Color = Color::new(0.95, 0.35, 0.35, 1.0);
