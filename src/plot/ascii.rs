use crate::plot::core::Point;

const MIN_CANVAS: usize = 2;

/// Draw sampled points on a character grid, with axes where they fall inside the window.
///
/// Points whose y is absent or not finite are skipped. The y window is fitted to the
/// remaining points; x is taken from the first and last point.
pub fn render_ascii(points: &[Point], width: usize, height: usize) -> String {
    let width = width.max(MIN_CANVAS);
    let height = height.max(MIN_CANVAS);
    let mut grid = vec![vec![' '; width]; height];

    let finite: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|p| p.y.filter(|y| y.is_finite()).map(|y| (p.x, y)))
        .collect();

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return to_text(&grid);
    };
    let (x_min, x_max) = (first.x, last.x);

    let (mut y_min, mut y_max) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    if finite.is_empty() {
        (y_min, y_max) = (-1.0, 1.0);
    } else if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }

    let column = |x: f64| scale(x, x_min, x_max, width);
    let row = |y: f64| height - 1 - scale(y, y_min, y_max, height);

    if y_min <= 0.0
        && 0.0 <= y_max
        && let Some(line) = grid.get_mut(row(0.0))
    {
        line.fill('-');
    }
    if x_min <= 0.0 && 0.0 <= x_max {
        let c = column(0.0);
        for line in &mut grid {
            if let Some(cell) = line.get_mut(c) {
                *cell = if *cell == '-' { '+' } else { '|' };
            }
        }
    }
    for &(x, y) in &finite {
        if let Some(cell) = grid.get_mut(row(y)).and_then(|line| line.get_mut(column(x))) {
            *cell = '*';
        }
    }

    to_text(&grid)
}

fn scale(value: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let ratio = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    ((ratio * (cells - 1) as f64).round() as usize).min(cells - 1)
}

fn to_text(grid: &[Vec<char>]) -> String {
    grid.iter()
        .map(|line| line.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
