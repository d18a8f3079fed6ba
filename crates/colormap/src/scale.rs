//! Index color scales and multi-stop interpolation.
//!
//! Colors come from the per-index stops in the catalog. Stops are sorted
//! before every lookup since catalog order is not guaranteed ascending.

use serde::Serialize;
use tracing::debug;
use verdant_core::{get_index_definition, ColorStop, IndexDefinition, IndexKind, Rgb};

/// Returned for unknown indices.
pub const NEUTRAL_GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);

/// One entry of a legend gradient: `color` placed at `percent` of the
/// index's valid range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: Rgb,
    pub percent: f64,
}

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

/// Interpolate `value` along `stops`, which must be sorted ascending.
///
/// The first adjacent pair with `lo <= value <= hi` is used, so a value
/// equal to an interior stop resolves against the pair on its left (at
/// ratio 1, i.e. the stop's own color). Outside the stops the nearest end
/// color is returned unchanged. Two stops sharing a value produce the
/// lower stop's color at that value.
pub(crate) fn interpolate_stops(stops: &[ColorStop], value: f64) -> Rgb {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return NEUTRAL_GRAY;
    };

    for pair in stops.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if value >= lo.value && value <= hi.value {
            let span = hi.value - lo.value;
            let ratio = if span == 0.0 {
                0.0
            } else {
                (value - lo.value) / span
            };
            return lerp_color(lo.color, hi.color, ratio);
        }
    }

    if value < first.value {
        first.color
    } else {
        last.color
    }
}

/// Color for `value` on the scale of `def`. Stops are sorted first, so
/// the declaration order of `def.color_scale` does not matter.
pub fn color_for_definition(def: &IndexDefinition, value: f64) -> Rgb {
    interpolate_stops(&def.sorted_stops(), value)
}

/// Color for `value` on the scale of a known index.
pub fn color_for_kind(kind: IndexKind, value: f64) -> Rgb {
    color_for_definition(kind.definition(), value)
}

/// Color for `value` on the scale of `index_id`; [`NEUTRAL_GRAY`] when the
/// index is unknown.
pub fn color_for_value(index_id: &str, value: f64) -> Rgb {
    match get_index_definition(index_id) {
        Some(def) => color_for_definition(def, value),
        None => {
            debug!(index_id, "unknown spectral index, returning neutral gray");
            NEUTRAL_GRAY
        }
    }
}

// ─── Legend gradients ──────────────────────────────────────────────────

fn gradient_for(def: &IndexDefinition) -> Vec<GradientStop> {
    let (min, max) = def.valid_range;
    let range = max - min;

    def.sorted_stops()
        .iter()
        .map(|stop| {
            let percent = if range == 0.0 {
                0.0
            } else {
                ((stop.value - min) / range) * 100.0
            };
            GradientStop {
                color: stop.color,
                percent: percent.clamp(0.0, 100.0),
            }
        })
        .collect()
}

fn flat_gradient() -> Vec<GradientStop> {
    vec![
        GradientStop {
            color: NEUTRAL_GRAY,
            percent: 0.0,
        },
        GradientStop {
            color: NEUTRAL_GRAY,
            percent: 100.0,
        },
    ]
}

/// Legend gradient for `index_id`: one entry per stop in ascending order,
/// positioned by `(value - min) / (max - min) * 100` and clamped to
/// `[0, 100]`. Unknown indices get a flat neutral gradient.
pub fn scale_gradient_descriptor(index_id: &str) -> Vec<GradientStop> {
    match get_index_definition(index_id) {
        Some(def) => gradient_for(def),
        None => {
            debug!(index_id, "unknown spectral index, flat gradient");
            flat_gradient()
        }
    }
}

/// The gradient as a CSS `linear-gradient(to right, ...)` value.
///
/// Unknown indices render as a plain two-color gray gradient without
/// positions.
pub fn css_linear_gradient(index_id: &str) -> String {
    if get_index_definition(index_id).is_none() {
        return format!("linear-gradient(to right, {}, {})", NEUTRAL_GRAY, NEUTRAL_GRAY);
    }
    let stops: Vec<String> = scale_gradient_descriptor(index_id)
        .iter()
        .map(|s| format!("{} {}%", s.color, s.percent))
        .collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    #[test]
    fn ndvi_midpoint_is_channel_average() {
        // Between (0.0, #d2b48c) and (0.3, #ffffcc)
        let c = color_for_value("ndvi", 0.15);
        assert_eq!(c, Rgb::new(233, 218, 172));
        assert_eq!(c.to_hex(), "#e9daac");
    }

    #[test]
    fn clamps_outside_scale() {
        for def in verdant_core::index_definitions() {
            let stops = def.sorted_stops();
            let first = stops.first().unwrap();
            let last = stops.last().unwrap();
            assert_eq!(color_for_value(def.id, first.value - 10.0), first.color);
            assert_eq!(color_for_value(def.id, last.value + 10.0), last.color);
        }
    }

    #[test]
    fn stops_map_to_their_own_color() {
        for def in verdant_core::index_definitions() {
            for stop in def.color_scale {
                assert_eq!(
                    color_for_value(def.id, stop.value),
                    stop.color,
                    "{} at {}",
                    def.id,
                    stop.value
                );
            }
        }
    }

    // NDVI stops declared in descending order.
    const REVERSED_NDVI_SCALE: &[ColorStop] = &[
        ColorStop::new(1.0, 0x006100, "Dense"),
        ColorStop::new(0.7, 0x38a800, "Healthy"),
        ColorStop::new(0.5, 0xc6e090, "Moderate"),
        ColorStop::new(0.3, 0xffffcc, "Low"),
        ColorStop::new(0.0, 0xd2b48c, "Sparse"),
        ColorStop::new(-0.2, 0x8b4513, "Water/Bare"),
    ];

    fn reversed_ndvi() -> IndexDefinition {
        IndexDefinition {
            color_scale: REVERSED_NDVI_SCALE,
            ..*IndexKind::Ndvi.definition()
        }
    }

    #[test]
    fn unordered_stops_are_sorted_first() {
        let def = reversed_ndvi();
        assert_eq!(color_for_definition(&def, 0.15), hex("#e9daac"));
        assert_eq!(color_for_definition(&def, -0.5), hex("#8b4513"));
        assert_eq!(color_for_definition(&def, 1.5), hex("#006100"));
        for v in [-0.2, 0.05, 0.3, 0.42, 0.7, 0.99] {
            assert_eq!(color_for_definition(&def, v), color_for_value("ndvi", v), "at {}", v);
        }
    }

    const REVERSED_GRAY_SCALE: &[ColorStop] = &[
        ColorStop::new(1.0, 0xffffff, "hi"),
        ColorStop::new(0.0, 0x000000, "lo"),
    ];

    #[test]
    fn two_stop_reversed_scale() {
        let def = IndexDefinition {
            color_scale: REVERSED_GRAY_SCALE,
            ..*IndexKind::Lai.definition()
        };
        assert_eq!(color_for_definition(&def, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn colliding_stops_pick_lower_color() {
        let stops = [
            ColorStop::new(0.0, 0x000000, "a"),
            ColorStop::new(0.5, 0xff0000, "b"),
            ColorStop::new(0.5, 0x00ff00, "c"),
            ColorStop::new(1.0, 0x0000ff, "d"),
        ];
        assert_eq!(interpolate_stops(&stops, 0.5), hex("#ff0000"));
        assert_eq!(interpolate_stops(&stops, 0.75), Rgb::new(0, 128, 128));
    }

    #[test]
    fn nan_resolves_to_last_color() {
        assert_eq!(color_for_value("ndvi", f64::NAN), hex("#006100"));
    }

    #[test]
    fn unknown_index_is_gray() {
        for _ in 0..3 {
            assert_eq!(color_for_value("ndre", 0.4), NEUTRAL_GRAY);
        }
        assert_eq!(NEUTRAL_GRAY.to_hex(), "#808080");
    }

    #[test]
    fn kind_and_id_agree() {
        for kind in IndexKind::ALL {
            for v in [-1.0, -0.1, 0.0, 0.25, 0.9, 2.2, 5.0] {
                assert_eq!(color_for_kind(kind, v), color_for_value(kind.id(), v));
            }
        }
    }

    #[test]
    fn gradient_percentages_are_ordered_and_bounded() {
        for def in verdant_core::index_definitions() {
            let g = scale_gradient_descriptor(def.id);
            assert_eq!(g.len(), def.color_scale.len());
            assert!(g.iter().all(|s| (0.0..=100.0).contains(&s.percent)));
            assert!(g.windows(2).all(|w| w[0].percent <= w[1].percent));
        }
    }

    #[test]
    fn msi_gradient_positions() {
        let g = scale_gradient_descriptor("msi");
        let pct: Vec<f64> = g.iter().map(|s| s.percent).collect();
        let expected = [100.0 / 6.0, 100.0 / 3.0, 50.0, 200.0 / 3.0, 100.0];
        for (got, want) in pct.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "Expected {}, got {}", want, got);
        }
        assert_eq!(g[0].color, hex("#22c55e"));
    }

    #[test]
    fn unknown_gradient_is_flat_gray() {
        let g = scale_gradient_descriptor("ndre");
        assert_eq!(g.len(), 2);
        assert!(g.iter().all(|s| s.color == NEUTRAL_GRAY));
        assert_eq!(
            css_linear_gradient("ndre"),
            "linear-gradient(to right, #808080, #808080)"
        );
    }

    #[test]
    fn lai_css_gradient() {
        let css = css_linear_gradient("lai");
        assert!(css.starts_with("linear-gradient(to right, #fbbf24 0%, "));
        assert!(css.ends_with("#14532d 100%)"));
    }
}
