//! Fixed "jet" spectrum colormap (blue -> cyan -> yellow -> red) and the
//! clamping normalizer used for cell coloring.
//!
//! The channel breakpoints reproduce the classic matplotlib `jet`
//! piecewise-linear segments so renders stay visually identical to
//! existing exports.

/// Piecewise-linear breakpoints per channel: (position, value).
const RED: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.35, 0.0),
    (0.66, 1.0),
    (0.89, 1.0),
    (1.0, 0.5),
];
const GREEN: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const BLUE: &[(f64, f64)] = &[
    (0.0, 0.5),
    (0.11, 1.0),
    (0.34, 1.0),
    (0.65, 0.0),
    (1.0, 0.0),
];

fn channel(segments: &[(f64, f64)], t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    for pair in segments.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            if x1 == x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    segments.last().map_or(0.0, |&(_, y)| y)
}

/// Jet color at normalized position `t` in `[0, 1]`, as RGB channels in
/// `[0, 1]`. Out-of-range and non-finite inputs are clamped to the ends.
#[must_use]
pub fn jet(t: f64) -> (f64, f64, f64) {
    let t = if t.is_finite() { t } else { 0.0 };
    (channel(RED, t), channel(GREEN, t), channel(BLUE, t))
}

/// Maps `value` into `[0, 1]` relative to `[vmin, vmax]`, clamping values
/// outside the range. Callers must not pass `vmin == vmax`; range collapse
/// is the registry's responsibility.
#[must_use]
pub fn normalize(value: f64, vmin: f64, vmax: f64) -> f64 {
    ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0)
}
