use dioxus::prelude::*;

/// Outer circle radius, relative to the 200x100 viewBox.
pub(crate) const OUTER_RADIUS: f64 = 45.0;

const MIN_RADIUS_FACTOR: f64 = 0.05;
const MAX_RADIUS_FACTOR: f64 = 5.0;

/// Geometry for the concentric-circle view of one comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CircleLayout {
    /// Ratio missing, NaN, or negative: nothing meaningful to draw.
    Invalid,
    /// Ratio exactly zero: the inner circle would have no area.
    Zero,
    Circles {
        inner_radius: f64,
        inner_font_size: f64,
        inner_label_y: f64,
    },
}

/// The inner circle encodes the area ratio: area(A) / area(B) = 1 / value,
/// so r_a / r_b = sqrt(1 / value). The result is clamped to 5%..500% of the
/// outer radius so the circle stays both visible and bounded.
pub(crate) fn circle_layout(value: Option<f64>) -> CircleLayout {
    let value = match value {
        Some(value) if value.is_finite() => value,
        _ => return CircleLayout::Invalid,
    };
    if value < 0.0 {
        return CircleLayout::Invalid;
    }
    if value == 0.0 {
        return CircleLayout::Zero;
    }

    let inner_radius = (OUTER_RADIUS * (1.0 / value).sqrt()).clamp(
        OUTER_RADIUS * MIN_RADIUS_FACTOR,
        OUTER_RADIUS * MAX_RADIUS_FACTOR,
    );

    CircleLayout::Circles {
        inner_radius,
        // Shrink the inner label with its circle, within legible bounds.
        inner_font_size: (inner_radius * 0.3).clamp(3.0, 6.0),
        inner_label_y: 50.0 + (inner_radius * 0.5).min(4.0),
    }
}

/// Two concentric circles whose areas illustrate "one of A against one of B".
#[component]
pub fn ProportionCircles(label_a: String, label_b: String, value: Option<f64>) -> Element {
    match circle_layout(value) {
        CircleLayout::Invalid => rsx! {
            p { class: "circles__placeholder",
                "Cannot visualize ratio: invalid or non-positive result value received."
            }
        },
        CircleLayout::Zero => rsx! {
            p { class: "circles__placeholder", "Ratio is zero, cannot draw inner circle." }
        },
        CircleLayout::Circles {
            inner_radius,
            inner_font_size,
            inner_label_y,
        } => rsx! {
            svg {
                class: "circles",
                view_box: "0 0 200 100",
                "preserveAspectRatio": "xMidYMid meet",
                role: "img",
                "aria-label": "Area comparison of {label_a} and {label_b}",

                circle {
                    cx: "100",
                    cy: "50",
                    r: "{OUTER_RADIUS}",
                    fill: "rgba(25, 118, 210, 0.2)",
                    stroke: "rgba(25, 118, 210, 1)",
                    "stroke-width": "1",
                }
                circle {
                    cx: "100",
                    cy: "50",
                    r: "{inner_radius}",
                    fill: "rgba(255, 87, 34, 0.5)",
                    stroke: "rgba(255, 87, 34, 1)",
                    "stroke-width": "1",
                }

                text {
                    x: "100",
                    y: "95",
                    "text-anchor": "middle",
                    "font-size": "8",
                    fill: "#333",
                    "{label_b}"
                }
                text {
                    x: "100",
                    y: "{inner_label_y}",
                    "text-anchor": "middle",
                    "font-size": "{inner_font_size}",
                    fill: "#000",
                    "{label_a}"
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_radius(value: f64) -> f64 {
        match circle_layout(Some(value)) {
            CircleLayout::Circles { inner_radius, .. } => inner_radius,
            other => panic!("expected circles, got {other:?}"),
        }
    }

    #[test]
    fn half_ratio_scales_radius_by_sqrt_two() {
        let inner = layout_radius(0.5);
        let expected = OUTER_RADIUS * 2.0_f64.sqrt();
        assert!((inner - expected).abs() < 1e-9);
    }

    #[test]
    fn unit_ratio_matches_outer_radius() {
        assert!((layout_radius(1.0) - OUTER_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn huge_ratios_clamp_to_five_percent() {
        assert_eq!(layout_radius(1.0e6), OUTER_RADIUS * MIN_RADIUS_FACTOR);
    }

    #[test]
    fn tiny_ratios_clamp_to_five_times_outer() {
        assert_eq!(layout_radius(1.0e-4), OUTER_RADIUS * MAX_RADIUS_FACTOR);
    }

    #[test]
    fn label_font_shrinks_with_the_circle_within_bounds() {
        // Clamped-small circle: font floors at 3.
        match circle_layout(Some(1.0e6)) {
            CircleLayout::Circles {
                inner_font_size, ..
            } => assert_eq!(inner_font_size, 3.0),
            other => panic!("expected circles, got {other:?}"),
        }
        // Large circle: font caps at 6 and the label stays near the center.
        match circle_layout(Some(0.5)) {
            CircleLayout::Circles {
                inner_font_size,
                inner_label_y,
                ..
            } => {
                assert_eq!(inner_font_size, 6.0);
                assert_eq!(inner_label_y, 54.0);
            }
            other => panic!("expected circles, got {other:?}"),
        }
    }

    #[test]
    fn zero_ratio_is_its_own_placeholder() {
        assert_eq!(circle_layout(Some(0.0)), CircleLayout::Zero);
    }

    #[test]
    fn missing_nan_and_negative_are_invalid() {
        assert_eq!(circle_layout(None), CircleLayout::Invalid);
        assert_eq!(circle_layout(Some(f64::NAN)), CircleLayout::Invalid);
        assert_eq!(circle_layout(Some(-2.0)), CircleLayout::Invalid);
    }
}
