use chrono::{
  DateTime,
  Datelike,
  TimeZone
};

/// Text written into the footer year stamp.
pub fn year_stamp<Tz: TimeZone>(
  now: &DateTime<Tz>
) -> String {
  now.year().to_string()
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  #[test]
  fn renders_four_digit_year() {
    let now = Utc
      .with_ymd_and_hms(
        2026, 10, 19, 8, 30, 0
      )
      .unwrap();
    assert_eq!(year_stamp(&now), "2026");
  }
}
