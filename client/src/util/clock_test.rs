use super::*;

#[test]
fn year_from_unix_ms_handles_epoch_and_boundaries() {
    assert_eq!(year_from_unix_ms(0), 1970);
    // 2024-01-01T00:00:00Z
    assert_eq!(year_from_unix_ms(1_704_067_200_000), 2024);
    // 2023-12-31T23:59:59Z
    assert_eq!(year_from_unix_ms(1_704_067_199_000), 2023);
    // 2024-02-29T12:00:00Z
    assert_eq!(year_from_unix_ms(1_709_208_000_000), 2024);
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}

#[test]
fn format_time_is_zero_padded() {
    assert_eq!(format_time(0), "00:00");
    // 1970-01-01T09:05:00Z
    assert_eq!(format_time(32_700_000), "09:05");
}

#[test]
fn out_of_range_timestamp_falls_back_to_epoch_year() {
    assert_eq!(year_from_unix_ms(u64::MAX), 1970);
}
