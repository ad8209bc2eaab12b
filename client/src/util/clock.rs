//! Wall-clock helpers.
//!
//! The browser clock comes from `js_sys::Date`; native builds (SSR, tests)
//! use `SystemTime`. Calendar math goes through `time`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now() as u64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Current calendar year (UTC).
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or_else(|_| year_from_unix_ms(now_ms()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        year_from_unix_ms(now_ms())
    }
}

/// Calendar year (UTC) of a Unix timestamp in milliseconds.
#[must_use]
pub fn year_from_unix_ms(ms: u64) -> i32 {
    time::OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .map_or(time::OffsetDateTime::UNIX_EPOCH.year(), time::OffsetDateTime::year)
}

/// `HH:MM` (UTC) for a Unix timestamp in milliseconds.
#[must_use]
pub fn format_time(ms: u64) -> String {
    let minutes_of_day = (ms / 60_000) % (24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}
