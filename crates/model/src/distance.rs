const METERS_TO_MILES: f64 = 0.000621371;

/// A display-ready rendering of a raw meter distance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedDistance {
    /// The converted magnitude (meters or miles, before rounding).
    pub magnitude: f64,
    pub rounded: String,
    pub unit: String,
    pub display: String,
}

/// Format a meter distance for display, metric or imperial. Pure; negative
/// input is passed through and simply formats with a sign.
pub fn format_distance(meters: f64, use_metric: bool) -> FormattedDistance {
    let magnitude = if use_metric {
        meters
    } else {
        meters * METERS_TO_MILES
    };

    let (rounded, unit) = if use_metric {
        if magnitude < 1000.0 {
            (format!("{}", magnitude.round()), "m")
        } else {
            (format!("{:.2}", magnitude / 1000.0), "km")
        }
    } else {
        (format!("{:.2}", magnitude), "mi")
    };

    let display = format!("{rounded}{unit}");
    FormattedDistance {
        magnitude,
        rounded,
        unit: unit.to_owned(),
        display,
    }
}
