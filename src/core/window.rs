use crate::core::ballistics::TrajectoryResult;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// Upper data bounds of a plot whose axes both start at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_max: f64,
    pub y_max: f64,
}

/// Pads both axes independently, never shrinking below one meter.
pub fn padded_axis_window(raw_max_x: f64, raw_max_y: f64) -> AxisWindow {
    let raw_x_span = raw_max_x.max(MIN_SPAN);
    let raw_y_span = raw_max_y.max(MIN_SPAN);
    AxisWindow {
        x_max: raw_x_span + raw_x_span * X_PADDING_RATIO,
        y_max: raw_y_span + raw_y_span * Y_PADDING_RATIO,
    }
}

/// Pads like [`padded_axis_window`], then grows whichever axis is short so
/// `x_max / y_max == ratio`.
pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64, ratio: f64) -> AxisWindow {
    let AxisWindow {
        mut x_max,
        mut y_max,
    } = padded_axis_window(raw_max_x, raw_max_y);

    if x_max / y_max < ratio {
        x_max = y_max * ratio;
    } else {
        y_max = x_max / ratio;
    }

    AxisWindow { x_max, y_max }
}

/// Window covering every sample of one or more trajectories.
pub fn trajectory_window<'a>(
    results: impl IntoIterator<Item = &'a TrajectoryResult>,
    ratio: Option<f64>,
) -> AxisWindow {
    let (raw_max_x, raw_max_y) = results.into_iter().fold((0.0f64, 0.0f64), |acc, result| {
        let sampled = result
            .samples
            .iter()
            .fold(acc, |(x, y), s| (x.max(s.x), y.max(s.y)));
        (
            sampled.0.max(result.horizontal_reach),
            sampled.1.max(result.max_height),
        )
    });

    match ratio {
        Some(ratio) => fixed_ratio_axis_window(raw_max_x, raw_max_y, ratio),
        None => padded_axis_window(raw_max_x, raw_max_y),
    }
}
