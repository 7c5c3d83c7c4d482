//! Responsive sizing policy: breakpoints, margins, font tiers, and axis
//! label thinning.

use crate::constants::{
    MEDIUM_BREAKPOINT, NARROW_BREAKPOINT, NARROW_MIN_HEIGHT,
};

/// Container width class driving margins and typography.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn classify(width: f64) -> Self {
        if width < NARROW_BREAKPOINT {
            Self::Narrow
        } else if width < MEDIUM_BREAKPOINT {
            Self::Medium
        } else {
            Self::Wide
        }
    }
}

/// Pixel margins between the container edge and the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn inner_width(&self, width: f64) -> f64 {
        (width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self, height: f64) -> f64 {
        (height - self.top - self.bottom).max(0.0)
    }
}

/// Vertical bar chart margins per breakpoint. Narrow containers trade right
/// margin for plot width and grow the bottom to fit rotated tick labels.
pub fn bar_margins(width: f64) -> Margins {
    match Breakpoint::classify(width) {
        Breakpoint::Narrow => Margins::new(40.0, 10.0, 110.0, 40.0),
        Breakpoint::Medium => Margins::new(40.0, 20.0, 100.0, 50.0),
        Breakpoint::Wide => Margins::new(40.0, 30.0, 90.0, 60.0),
    }
}

/// Font sizes in px for the three text roles a chart uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontTier {
    pub axis: f64,
    pub value: f64,
    pub title: f64,
}

impl FontTier {
    pub fn for_width(width: f64) -> Self {
        match Breakpoint::classify(width) {
            Breakpoint::Narrow => Self {
                axis: 9.0,
                value: 9.0,
                title: 13.0,
            },
            Breakpoint::Medium => Self {
                axis: 10.0,
                value: 10.0,
                title: 14.0,
            },
            Breakpoint::Wide => Self {
                axis: 11.0,
                value: 11.0,
                title: 16.0,
            },
        }
    }
}

/// Keep every n-th tick label so at most `max(10, floor(width / 40))` fit.
///
/// Returns the stride; callers draw label `i` when `i % stride == 0`.
pub fn label_stride(label_count: usize, plot_width: f64) -> usize {
    let max_labels = ((plot_width / 40.0).floor() as usize).max(10);
    if label_count <= max_labels {
        1
    } else {
        label_count.div_ceil(max_labels)
    }
}

/// Narrow containers get a taller minimum so rotated labels stay legible.
pub fn min_chart_height(width: f64, height: f64) -> f64 {
    if Breakpoint::classify(width) == Breakpoint::Narrow {
        height.max(NARROW_MIN_HEIGHT)
    } else {
        height
    }
}
