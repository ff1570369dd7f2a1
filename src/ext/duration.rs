use std::time::Duration;

/// Compact duration rendering for log lines.
pub trait DurationFormat {
    fn log_str(&self) -> String;
}

impl DurationFormat for Duration {
    fn log_str(&self) -> String {
        if self.as_secs() > 0 {
            format!("{:.1}s", self.as_secs_f64())
        } else if self.as_millis() > 0 {
            format!("{}ms", self.as_millis())
        } else {
            format!("{}µs", self.as_micros())
        }
    }
}
