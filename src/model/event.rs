/// One earthquake felt-report, built from the first feature of a USGS
/// query response. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub num_of_people: i64,
    pub perceived_strength: &'static str,
}

pub const NOT_FELT: &str = "Not felt";

// MMI-style thresholds, highest first. The first threshold the value
// reaches wins.
const STRENGTH_SCALE: [(f64, &str); 7] = [
    (7.0, "Extreme"),
    (6.0, "Violent"),
    (5.0, "Severe"),
    (4.0, "Strong"),
    (3.0, "Moderate"),
    (2.0, "Light"),
    (1.0, "Weak"),
];

/// Maps a perceived-intensity value to its display label. Values below
/// the lowest threshold, or absent values, are [`NOT_FELT`].
pub fn perceived_strength(mag: Option<f64>) -> &'static str {
    let Some(v) = mag else {
        return NOT_FELT;
    };

    for (threshold, label) in STRENGTH_SCALE {
        if v >= threshold {
            return label;
        }
    }

    NOT_FELT
}
