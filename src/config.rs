/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Endpoint serving the full county time series
    pub const DATA_URL: &'static str = "https://us-central1-scotts-tools.cloudfunctions.net/covid";

    /// Maximum number of counties plotted at once
    pub const SELECTION_LIMIT: usize = 10;

    /// Distance in records between "this week" and "last week"
    pub const GROWTH_LOOKBACK_DAYS: usize = 7;

    /// Number of trailing daily records shown on the chart
    pub const PLOT_WINDOW_DAYS: usize = 14;

    /// Show every nth date label on the x-axis
    pub const X_AXIS_LABEL_INTERVAL: u32 = 5;

    /// Query string parameter holding the selection
    pub const QUERY_PARAM: &'static str = "counties";

    /// Selection used when the URL carries none
    pub const DEFAULT_COUNTIES: [&'static str; 3] = [
        "San Francisco, California",
        "New York City, New York",
        "Los Angeles, California",
    ];

    /// Keys in the source data that are not real counties
    pub const EXCLUDED_COUNTIES: [&'static str; 1] = ["Unknown"];

    /// Line colours, indexed by selection position
    pub const PALETTE: [&'static str; 10] = [
        "#F26419", "#F6AE2D", "#2F4858", "#33658A", "#55DDE0", "#61D4B3", "#FD2EB3", "#EAB0D9",
        "#FF677D", "#D8B5B5",
    ];

    /// Delay before re-rendering the chart after a resize (ms)
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Returns the colour for the series at `index` in the selection.
    pub fn series_color(index: usize) -> &'static str {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// Message shown when a toggle would exceed the selection limit.
    pub fn selection_limit_message() -> String {
        format!("{} is currently the selection limit", Self::SELECTION_LIMIT)
    }
}
