//! Job names
//!
//! Prediction jobs are named after their submission time, optionally followed
//! by a user suffix reduced to word characters.
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Name a job submitted at `now`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ferritin_core::job::job_name;
/// let now = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
/// assert_eq!(job_name(now, None), "20240305T070809");
/// assert_eq!(job_name(now, Some("my run")), "20240305T070809_my_run");
/// ```
pub fn job_name(now: DateTime<Utc>, suffix: Option<&str>) -> String {
    let stamp = now.format(TIMESTAMP_FORMAT).to_string();
    match suffix {
        Some(suffix) => format!("{}_{}", stamp, sanitize(suffix)),
        None => stamp,
    }
}

/// Replace every non-word character with `_`.
pub fn sanitize(suffix: &str) -> String {
    suffix
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("T1078-test"), "T1078_test");
        assert_eq!(sanitize("a.b/c d_e"), "a_b_c_d_e");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_job_name() {
        let now = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 1).unwrap();
        assert_eq!(job_name(now, None), "20211231T235901");
        assert_eq!(job_name(now, Some("x!y")), "20211231T235901_x_y");
    }
}
