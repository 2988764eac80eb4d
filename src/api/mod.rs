pub mod usgs;

pub(crate) const UA: &str = "felt-report/0.1";

/// Fixed USGS query: felt reports for events with at least 50 responses
/// and magnitude 5+ in early 2016.
pub const USGS_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&starttime=2016-01-01&endtime=2016-05-02&minfelt=50&minmagnitude=5";
