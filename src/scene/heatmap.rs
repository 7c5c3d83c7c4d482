//! Heatmap builder: a module×month matrix shaded on a sequential red ramp,
//! with a gradient legend strip.

use crate::data::MatrixData;
use crate::layout::{BandScale, FontTier};
use crate::palette::{FOREGROUND, interpolate_reds};
use crate::scene::{Datum, Scene, Shape, TextAnchor, format_value, title_text};
use crate::types::ContainerSize;

const CELL_PADDING: f64 = 0.05;
const GRADIENT_WIDTH: f64 = 120.0;
const GRADIENT_HEIGHT: f64 = 16.0;
const GRADIENT_STEPS: usize = 20;

pub fn build(
    matrix: &MatrixData,
    title: &str,
    x_title: &str,
    y_title: &str,
    size: ContainerSize,
) -> Scene {
    let width = size.width;
    let height = size.height;
    let fonts = FontTier::for_width(width);

    let mut scene = Scene::new(width, height);
    title_text(&mut scene, title, fonts.title);

    let top = 40.0;
    let right = 80.0;
    let bottom = 40.0;
    let left = 100.0;
    let inner_width = (width - left - right).max(0.0);
    let inner_height = (height - top - bottom).max(0.0);
    let plot_bottom = height - bottom;

    let x = BandScale::new(matrix.col_keys.len(), 0.0, inner_width, CELL_PADDING, 0.0);
    let y = BandScale::new(matrix.row_keys.len(), 0.0, inner_height, CELL_PADDING, 0.0);
    let max_value = matrix.max_value();

    for (r, row_key) in matrix.row_keys.iter().enumerate() {
        for (c, col_key) in matrix.col_keys.iter().enumerate() {
            let value = matrix.values[r][c];
            let t = if max_value > 0.0 { value / max_value } else { 0.0 };
            scene.push(
                Shape::rect(
                    left + x.position(c),
                    top + y.position(r),
                    x.bandwidth(),
                    y.bandwidth(),
                    interpolate_reds(t),
                )
                .with_datum(Datum::new(format!("{row_key} / {col_key}"), value)),
            );
        }
    }

    crate::scene::band_axis_left(&mut scene, &y, &matrix.row_keys, left, top, plot_bottom, fonts.axis);
    crate::scene::band_axis_bottom(
        &mut scene,
        &x,
        &matrix.col_keys,
        left,
        width - right,
        plot_bottom,
        fonts.axis,
        1,
        false,
    );

    // Axis titles.
    if !x_title.is_empty() {
        scene.x_label = Some(x_title.to_string());
        scene.push(Shape::text(
            left + inner_width / 2.0,
            height - 6.0,
            x_title,
            fonts.axis,
            FOREGROUND,
        ));
    }
    if !y_title.is_empty() {
        scene.y_label = Some(y_title.to_string());
        scene.push(
            Shape::text(14.0, top + inner_height / 2.0, y_title, fonts.axis, FOREGROUND)
                .rotated(-90.0),
        );
    }

    gradient_legend(&mut scene, max_value, width - right - GRADIENT_WIDTH, 12.0, fonts.axis);

    scene
}

// The color ramp legend is a strip of discrete steps with min/max labels;
// no keyed legend applies to a continuous scale.
fn gradient_legend(scene: &mut Scene, max_value: f64, x: f64, y: f64, font_size: f64) {
    let step_width = GRADIENT_WIDTH / GRADIENT_STEPS as f64;
    for i in 0..GRADIENT_STEPS {
        let t = i as f64 / (GRADIENT_STEPS - 1) as f64;
        scene.push(Shape::rect(
            x + i as f64 * step_width,
            y,
            step_width + 0.5,
            GRADIENT_HEIGHT,
            interpolate_reds(t),
        ));
    }
    scene.push(
        Shape::text(x - 4.0, y + GRADIENT_HEIGHT - 4.0, "0", font_size, FOREGROUND)
            .anchored(TextAnchor::End),
    );
    scene.push(
        Shape::text(
            x + GRADIENT_WIDTH + 4.0,
            y + GRADIENT_HEIGHT - 4.0,
            format_value(max_value),
            font_size,
            FOREGROUND,
        )
        .anchored(TextAnchor::Start),
    );
}
