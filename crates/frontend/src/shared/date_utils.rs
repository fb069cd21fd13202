//! Date formatting helpers for table cells

use chrono::{DateTime, Utc};

/// "2024-05-01 13:45:07" for table columns
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Date-only variant, used where time is noise
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 13, 45, 7).unwrap();
        assert_eq!(format_timestamp(dt), "2024-05-01 13:45:07");
        assert_eq!(format_date(dt), "2024-05-01");
    }
}
