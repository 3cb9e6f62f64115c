use crate::{Error, Result};

/// Format seconds into a subtitle timestamp (`[HH:]MM:SS<marker>mmm`).
///
/// The hour field is included only when forced by `always_include_hours` or when the
/// value reaches one hour. Milliseconds are rounded half away from zero, which keeps
/// the output deterministic across platforms.
pub fn format_timestamp(
    seconds: f64,
    always_include_hours: bool,
    decimal_marker: &str,
) -> Result<String> {
    // `>= 0.0` is false for NaN as well, so malformed values take this branch too.
    if !(seconds >= 0.0) || !seconds.is_finite() {
        return Err(Error::invalid_input(format!(
            "non-negative timestamp expected, got {seconds}"
        )));
    }

    let mut milliseconds = (seconds * 1000.0).round() as u64;

    let hours = milliseconds / 3_600_000;
    milliseconds -= hours * 3_600_000;

    let minutes = milliseconds / 60_000;
    milliseconds -= minutes * 60_000;

    let secs = milliseconds / 1_000;
    milliseconds -= secs * 1_000;

    let hours_marker = if always_include_hours || hours > 0 {
        format!("{hours:02}:")
    } else {
        String::new()
    };

    Ok(format!(
        "{hours_marker}{minutes:02}:{secs:02}{decimal_marker}{milliseconds:03}"
    ))
}

/// The timestamp convention of one subtitle format.
#[derive(Debug, Clone, Copy)]
pub struct TimestampStyle {
    pub always_include_hours: bool,
    pub decimal_marker: &'static str,
}

impl TimestampStyle {
    pub fn format(&self, seconds: f64) -> Result<String> {
        format_timestamp(seconds, self.always_include_hours, self.decimal_marker)
    }
}

/// SRT timestamps force the hour field and use a decimal comma.
pub const SRT_TIMESTAMPS: TimestampStyle = TimestampStyle {
    always_include_hours: true,
    decimal_marker: ",",
};

/// WebVTT timestamps drop the hour field below one hour and use a decimal point.
pub const VTT_TIMESTAMPS: TimestampStyle = TimestampStyle {
    always_include_hours: false,
    decimal_marker: ".",
};
