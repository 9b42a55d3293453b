//! Graph renderers: SVG documents and terminal plots

use crate::domain::{Canvas, GraphLayout, Padding, UnitSystem};

pub const DEFAULT_SVG_WIDTH: u32 = 640;
pub const DEFAULT_SVG_HEIGHT: u32 = 240;
pub const DEFAULT_TERM_COLS: u32 = 60;
pub const DEFAULT_TERM_ROWS: u32 = 15;

/// Largest accepted canvas width or height
pub const MAX_DIMENSION: i64 = 4000;

const LINE_WIDTH: f64 = 2.5;
const DOT_RADIUS: f64 = 5.0;
const COLOR_LINE: &str = "#E8533F";
const COLOR_GRID: &str = "#EEEEEE";

const GRID_CHAR: char = '·';
const LINE_CHAR: char = '•';
const DOT_CHAR: char = '●';

/// Canvas for an SVG image of the given pixel size
pub fn svg_canvas(width: u32, height: u32) -> Canvas {
    Canvas::new(width as f64, height as f64)
}

/// Canvas whose coordinates map one-to-one onto character cells
pub fn terminal_canvas(cols: u32, rows: u32) -> Canvas {
    Canvas::new(
        cols.saturating_sub(1) as f64,
        rows.saturating_sub(1) as f64,
    )
    .with_padding(Padding::NONE)
}

/// Render a layout computed on `canvas` as a standalone SVG document
pub fn render_svg(layout: &GraphLayout, canvas: &Canvas) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = canvas.width,
        h = canvas.height
    );

    for y in layout.grid_lines {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            layout.x_start, y, layout.x_end, y, COLOR_GRID
        ));
    }

    let path: Vec<String> = layout
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{} {:.2} {:.2}", cmd, p.x, p.y)
        })
        .collect();
    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>\n",
        path.join(" "),
        COLOR_LINE,
        LINE_WIDTH
    ));

    for p in &layout.points {
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"><title>{} {:.1}</title></circle>\n",
            p.x,
            p.y,
            DOT_RADIUS,
            COLOR_LINE,
            p.date.format("%Y-%m-%d"),
            p.weight
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render a layout computed on [`terminal_canvas`] as text
pub fn render_terminal(layout: &GraphLayout, cols: u32, rows: u32, unit: UnitSystem) -> String {
    let cols = cols.max(1) as usize;
    let rows = rows.max(1) as usize;
    let mut grid = vec![vec![' '; cols]; rows];

    let cell = |x: f64, y: f64| -> (usize, usize) {
        let col = (x.round().max(0.0) as usize).min(cols - 1);
        let row = (y.round().max(0.0) as usize).min(rows - 1);
        (row, col)
    };

    for y in layout.grid_lines {
        let (row, _) = cell(0.0, y);
        grid[row].iter_mut().for_each(|c| *c = GRID_CHAR);
    }

    for pair in layout.points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let steps = (b.x - a.x).abs().max((b.y - a.y).abs()).ceil().max(1.0) as usize;
        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            let (row, col) = cell(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            grid[row][col] = LINE_CHAR;
        }
    }

    for p in &layout.points {
        let (row, col) = cell(p.x, p.y);
        grid[row][col] = DOT_CHAR;
    }

    let mid = (layout.value_max + layout.value_min) / 2.0;
    let grid_rows: Vec<usize> = layout.grid_lines.iter().map(|y| cell(0.0, *y).0).collect();
    let labels = [layout.value_max, mid, layout.value_min];

    let mut output = String::new();
    for (r, line) in grid.iter().enumerate() {
        let label = grid_rows
            .iter()
            .position(|gr| *gr == r)
            .map(|i| format!("{:>7.1}", labels[i]))
            .unwrap_or_else(|| " ".repeat(7));
        output.push_str(&label);
        output.push_str(" │");
        output.push_str(line.iter().collect::<String>().trim_end());
        output.push('\n');
    }

    if let (Some(first), Some(last)) = (layout.points.first(), layout.points.last()) {
        let start = first.date.format("%b %d").to_string();
        let end = last.date.format("%b %d").to_string();
        let gap = cols.saturating_sub(start.len() + end.len()).max(1);
        output.push_str(&format!(
            "{:>7}  {}{}{}\n",
            unit.weight_label(),
            start,
            " ".repeat(gap),
            end
        ));
    }

    output
}
