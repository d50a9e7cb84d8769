use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One pen instruction in plot-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    #[must_use]
    pub fn end_point(self) -> (f64, f64) {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::CubicTo { x, y, .. } => (x, y),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => [c1x, c1y, c2x, c2y, x, y].iter().all(|v| v.is_finite()),
        }
    }
}

/// Builds a monotone-in-x cubic path through `points`.
///
/// Tangents follow Steffen's method, so no segment overshoots the vertical
/// band spanned by its two endpoints. Consecutive coincident points are
/// skipped. One point yields a lone move; two points yield a straight line.
#[must_use]
pub fn monotone_x_path(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let mut unique: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for &point in points {
        if unique.last() != Some(&point) {
            unique.push(point);
        }
    }

    let mut commands = Vec::with_capacity(unique.len());
    let Some(&(x0, y0)) = unique.first() else {
        return commands;
    };
    commands.push(PathCommand::MoveTo { x: x0, y: y0 });

    match unique.len() {
        1 => return commands,
        2 => {
            let (x, y) = unique[1];
            commands.push(PathCommand::LineTo { x, y });
            return commands;
        }
        _ => {}
    }

    let last = unique.len() - 1;
    let mut tangents = vec![0.0; unique.len()];
    for idx in 1..last {
        tangents[idx] = interior_tangent(unique[idx - 1], unique[idx], unique[idx + 1]);
    }
    tangents[0] = end_tangent(unique[0], unique[1], tangents[1]);
    tangents[last] = end_tangent(unique[last - 1], unique[last], tangents[last - 1]);

    for idx in 0..last {
        let (xa, ya) = unique[idx];
        let (xb, yb) = unique[idx + 1];
        let dx = (xb - xa) / 3.0;
        commands.push(PathCommand::CubicTo {
            c1x: xa + dx,
            c1y: ya + dx * tangents[idx],
            c2x: xb - dx,
            c2y: yb - dx * tangents[idx + 1],
            x: xb,
            y: yb,
        });
    }

    commands
}

/// Serializes commands as SVG path data (`M0,1C…`).
#[must_use]
pub fn to_svg_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        // Writing into a String cannot fail.
        let _ = match *command {
            PathCommand::MoveTo { x, y } => write!(out, "M{},{}", num(x), num(y)),
            PathCommand::LineTo { x, y } => write!(out, "L{},{}", num(x), num(y)),
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => write!(
                out,
                "C{},{},{},{},{},{}",
                num(c1x),
                num(c1y),
                num(c2x),
                num(c2y),
                num(x),
                num(y)
            ),
        };
    }
    out
}

fn num(value: f64) -> f64 {
    // Avoid "-0" in path data.
    if value == 0.0 { 0.0 } else { value }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Zero-width intervals divide by a signed zero so the slope keeps the
/// direction of the neighbouring interval.
fn signed_width(own: f64, other: f64) -> f64 {
    if own != 0.0 {
        own
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = (p1.1 - p0.1) / signed_width(h0, h1);
    let s1 = (p2.1 - p1.1) / signed_width(h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_nan() { 0.0 } else { tangent }
}

fn end_tangent(p0: (f64, f64), p1: (f64, f64), neighbour: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.1 - p0.1) / h - neighbour) / 2.0
    }
}
