//! Date formatter tests.

use chrono::{DateTime, Local, TimeZone};
use patlayout::date;

fn when() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 17, 9, 8, 7).unwrap()
}

#[test]
fn resolve_maps_aliases() {
    assert_eq!(date::resolve("ISO8601"), date::ISO8601_FORMAT);
    assert_eq!(date::resolve("ABSOLUTE"), date::ABSOLUTETIME_FORMAT);
    assert_eq!(date::resolve("DATE"), date::DATETIME_FORMAT);
}

#[test]
fn resolve_passes_custom_templates_through() {
    assert_eq!(date::resolve("%Y"), "%Y");
    assert_eq!(date::resolve("iso8601"), "iso8601");
}

#[test]
fn iso8601_rendering() {
    assert_eq!(
        date::as_string(date::ISO8601_FORMAT, &when()),
        "2024-05-17T09:08:07.000"
    );
}

#[test]
fn absolute_rendering() {
    assert_eq!(
        date::as_string(date::ABSOLUTETIME_FORMAT, &when()),
        "09:08:07.000"
    );
}

#[test]
fn datetime_rendering() {
    assert_eq!(
        date::as_string(date::DATETIME_FORMAT, &when()),
        "17 05 2024 09:08:07.000"
    );
}

#[test]
fn custom_template_rendering() {
    assert_eq!(date::as_string("%Y/%j", &when()), "2024/138");
}

#[test]
fn locale_time_is_time_of_day() {
    assert_eq!(date::locale_time(&when()), "09:08:07");
}
