use chrono::{DateTime, TimeZone, Utc};

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
const MONTH_YEAR_FORMAT: &str = "%b-%y";

/// Source of the current time, injected so report timestamps can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as epoch milliseconds.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Converts epoch milliseconds into a UTC timestamp.
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Formats epoch milliseconds as `dd/MM/yyyy`.
pub fn format_date(millis: i64) -> Option<String> {
    from_epoch_millis(millis).map(|d| d.format(DATE_FORMAT).to_string())
}

/// Formats epoch milliseconds as `dd/MM/yyyy HH:mm:ss`.
pub fn format_date_time(millis: i64) -> Option<String> {
    from_epoch_millis(millis).map(|d| d.format(DATE_TIME_FORMAT).to_string())
}

/// Formats epoch milliseconds as an abbreviated month and two-digit year, e.g. `Mar-24`.
pub fn format_month_year(millis: i64) -> Option<String> {
    from_epoch_millis(millis).map(|d| d.format(MONTH_YEAR_FORMAT).to_string())
}
