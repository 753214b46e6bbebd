//! Horizon-crossing root finder.
//!
//! An altitude function is sampled at integer hours 0..=24 of a window the
//! caller chooses. A parabola through each triple (h−1, h, h+1) for
//! h = 1, 3, …, 23 locates zero crossings to well under a minute.

use tracing::trace;

/// Parabola through `(−1, y₋)`, `(0, y₀)`, `(+1, y₊)` and its roots in
/// [−1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    /// Abscissa of the vertex.
    pub vertex_x: f64,
    /// Ordinate of the vertex.
    pub vertex_y: f64,
    /// Smaller root, or the larger one when the smaller lies left of −1.
    pub z1: f64,
    /// Larger root.
    pub z2: f64,
    /// Number of roots inside [−1, 1]: 0, 1 or 2.
    pub root_count: u8,
}

/// Fit a parabola through three equally spaced samples.
pub fn quad(ym: f64, y0: f64, yp: f64) -> Parabola {
    let a = 0.5 * (ym + yp) - y0;
    let b = 0.5 * (yp - ym);
    let c = y0;
    let vertex_x = -b / (2.0 * a);
    let vertex_y = (a * vertex_x + b) * vertex_x + c;
    let dis = b * b - 4.0 * a * c;

    let (mut z1, mut z2, mut root_count) = (0.0, 0.0, 0u8);
    if dis > 0.0 {
        let dx = 0.5 * dis.sqrt() / a.abs();
        z1 = vertex_x - dx;
        z2 = vertex_x + dx;
        if z1.abs() <= 1.0 {
            root_count += 1;
        }
        if z2.abs() <= 1.0 {
            root_count += 1;
        }
        if z1 < -1.0 {
            z1 = z2;
        }
    }
    Parabola {
        vertex_x,
        vertex_y,
        z1,
        z2,
        root_count,
    }
}

/// Rise and set offsets in hours from the window start. `None` when the
/// crossing does not happen inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizonCrossings {
    pub rise: Option<f64>,
    pub set: Option<f64>,
}

impl HorizonCrossings {
    /// Both crossings, when both were found.
    pub fn both(&self) -> Option<(f64, f64)> {
        self.rise.zip(self.set)
    }
}

/// Find where `altitude(hour)` crosses zero upward (rise) and downward (set)
/// over hours 0..=24.
///
/// `altitude` should already have the horizon altitude subtracted. The scan
/// stops as soon as both crossings are known.
pub fn find_crossings<F>(altitude: F) -> HorizonCrossings
where
    F: Fn(f64) -> f64,
{
    let mut out = HorizonCrossings::default();
    let mut ym = altitude(0.0);
    let mut hour = 1u32;

    while hour < 25 {
        let h = f64::from(hour);
        let y0 = altitude(h);
        let yp = altitude(h + 1.0);
        let p = quad(ym, y0, yp);

        match p.root_count {
            1 => {
                if ym < 0.0 {
                    out.rise = Some(h + p.z1);
                } else {
                    out.set = Some(h + p.z1);
                }
            }
            2 => {
                if p.vertex_y < 0.0 {
                    out.rise = Some(h + p.z2);
                    out.set = Some(h + p.z1);
                } else {
                    out.rise = Some(h + p.z1);
                    out.set = Some(h + p.z2);
                }
            }
            _ => {}
        }
        if p.root_count > 0 {
            trace!(hour, roots = p.root_count, rise = ?out.rise, set = ?out.set, "horizon crossing");
        }

        ym = yp;
        hour += 2;
        if out.rise.is_some() && out.set.is_some() {
            break;
        }
    }
    out
}
