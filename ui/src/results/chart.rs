use dioxus::prelude::*;

use crate::core::format;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 150.0;
const PADDING: f64 = 32.0;
const TICK_COUNT: usize = 4;

/// Axis ceiling for the bar chart, recomputed on every draw.
///
/// Absent or negative ratios fall back to the default scale of 10; a ratio
/// of exactly zero gets a unit scale so the empty bar still reads as zero;
/// small positive ratios get a slightly padded scale with a floor.
pub(crate) fn axis_max(value: Option<f64>) -> f64 {
    match value {
        Some(value) if value > 0.0 => {
            if value <= 1.0 {
                2.0
            } else {
                (value * 1.2).ceil().max(5.0)
            }
        }
        Some(value) if value == 0.0 => 1.0,
        _ => 10.0,
    }
}

/// The value the bar actually draws: unknown and negative ratios collapse
/// to zero rather than erroring.
pub(crate) fn bar_value(value: Option<f64>) -> f64 {
    value.filter(|value| value.is_finite() && *value > 0.0).unwrap_or(0.0)
}

/// One horizontal bar showing how many of item A fit in one item B.
#[component]
pub fn RatioBarChart(label_a: String, label_b: String, value: Option<f64>) -> Element {
    let max = axis_max(value);
    let drawn = bar_value(value);

    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let bar_width = plot_width * (drawn / max).clamp(0.0, 1.0);
    let bar_label = format!("{label_a} in {label_b}");

    rsx! {
        svg {
            class: "ratio-chart",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            "preserveAspectRatio": "xMidYMid meet",
            role: "img",
            "aria-label": "Bar chart: {format::format_quantity(drawn)} out of a scale of {format::format_quantity(max)}",

            for tick in 0..=TICK_COUNT {
                line {
                    x1: "{PADDING + plot_width * (tick as f64 / TICK_COUNT as f64)}",
                    y1: "36",
                    x2: "{PADDING + plot_width * (tick as f64 / TICK_COUNT as f64)}",
                    y2: "102",
                    stroke: "#d7dde3",
                    "stroke-width": "1",
                }
            }
            for tick in 0..=TICK_COUNT {
                text {
                    x: "{PADDING + plot_width * (tick as f64 / TICK_COUNT as f64)}",
                    y: "118",
                    "text-anchor": "middle",
                    "font-size": "11",
                    fill: "#5b6770",
                    "{format::format_quantity(max * tick as f64 / TICK_COUNT as f64)}"
                }
            }

            text {
                x: "{PADDING}",
                y: "24",
                "font-size": "12",
                fill: "#333",
                "{bar_label}"
            }

            rect {
                x: "{PADDING}",
                y: "48",
                width: "{bar_width}",
                height: "42",
                fill: "rgba(25, 118, 210, 0.6)",
                stroke: "rgba(25, 118, 210, 1)",
                "stroke-width": "1",
            }

            text {
                x: "{CHART_WIDTH / 2.0}",
                y: "{CHART_HEIGHT - 6.0}",
                "text-anchor": "middle",
                "font-size": "11",
                fill: "#5b6770",
                "Quantity"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_ceiling_for_ordinary_values() {
        assert_eq!(axis_max(Some(25.0)), 30.0);
        assert_eq!(axis_max(Some(100.0)), 120.0);
    }

    #[test]
    fn small_values_get_a_minimum_scale() {
        assert_eq!(axis_max(Some(3.0)), 5.0);
        assert_eq!(axis_max(Some(4.0)), 5.0);
    }

    #[test]
    fn fractional_ratios_get_a_unit_friendly_scale() {
        assert_eq!(axis_max(Some(0.5)), 2.0);
        assert_eq!(axis_max(Some(1.0)), 2.0);
    }

    #[test]
    fn zero_gets_a_unit_scale() {
        assert_eq!(axis_max(Some(0.0)), 1.0);
    }

    #[test]
    fn unknown_and_negative_fall_back_to_default_scale() {
        assert_eq!(axis_max(None), 10.0);
        assert_eq!(axis_max(Some(-3.0)), 10.0);
        assert_eq!(axis_max(Some(f64::NAN)), 10.0);
    }

    #[test]
    fn bar_collapses_unknown_and_negative_to_zero() {
        assert_eq!(bar_value(None), 0.0);
        assert_eq!(bar_value(Some(-3.0)), 0.0);
        assert_eq!(bar_value(Some(f64::NAN)), 0.0);
        assert_eq!(bar_value(Some(25.0)), 25.0);
    }
}
