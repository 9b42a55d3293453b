//! Trend graph layout
//!
//! Maps a list of entries (newest first) onto canvas coordinates. The
//! oldest entry is plotted on the left, points are spaced evenly along x,
//! and the y axis spans the weight range widened by 15% on each side.
//! Renderers only draw what [`GraphLayout`] computes.

use crate::domain::{UnitSystem, WeightEntry};
use chrono::NaiveDate;

/// Fraction of the weight range added above and below the data
pub const RANGE_PADDING: f64 = 0.15;

/// Number of horizontal grid lines
pub const GRID_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub const NONE: Padding = Padding {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };
}

impl Default for Padding {
    fn default() -> Self {
        Padding {
            left: 20.0,
            right: 20.0,
            top: 15.0,
            bottom: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Canvas {
            width,
            height,
            padding: Padding::default(),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn drawable_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    fn drawable_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    /// Whether anything is left to plot on once the padding is taken off
    pub fn has_drawable_area(&self) -> bool {
        self.drawable_width() > 0.0 && self.drawable_height() > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphLayout {
    /// Points in chronological order (left to right)
    pub points: Vec<GraphPoint>,
    /// y coordinate of each horizontal grid line, top to bottom
    pub grid_lines: [f64; GRID_LINES],
    pub x_start: f64,
    pub x_end: f64,
    /// Weight at the top edge of the drawable area
    pub value_max: f64,
    /// Weight at the bottom edge of the drawable area
    pub value_min: f64,
}

impl GraphLayout {
    /// Lay out `entries` (newest first) on `canvas`, with weights expressed in
    /// `unit`. Returns `None` when fewer than two entries are given or the
    /// drawable area is empty.
    pub fn compute(entries: &[WeightEntry], unit: UnitSystem, canvas: &Canvas) -> Option<Self> {
        if entries.len() < 2 {
            return None;
        }

        if !canvas.has_drawable_area() {
            return None;
        }
        let width = canvas.drawable_width();
        let height = canvas.drawable_height();

        let chronological: Vec<(NaiveDate, f64)> = entries
            .iter()
            .rev()
            .map(|entry| (entry.date, entry.weight_in(unit)))
            .collect();

        let (min, max) = chronological
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, w)| {
                (lo.min(*w), hi.max(*w))
            });

        let mut range = max - min;
        if range == 0.0 {
            range = 1.0;
        }
        let padded_min = min - range * RANGE_PADDING;
        let padded_max = max + range * RANGE_PADDING;
        let padded_range = padded_max - padded_min;

        let pad = canvas.padding;
        let last = (chronological.len() - 1) as f64;
        let points = chronological
            .iter()
            .enumerate()
            .map(|(i, &(date, weight))| GraphPoint {
                x: pad.left + width * i as f64 / last,
                y: pad.top + height * (1.0 - (weight - padded_min) / padded_range),
                date,
                weight,
            })
            .collect();

        let mut grid_lines = [0.0; GRID_LINES];
        for (k, line) in grid_lines.iter_mut().enumerate() {
            *line = pad.top + (height / 2.0) * k as f64;
        }

        Some(GraphLayout {
            points,
            grid_lines,
            x_start: pad.left,
            x_end: pad.left + width,
            value_max: padded_max,
            value_min: padded_min,
        })
    }
}
