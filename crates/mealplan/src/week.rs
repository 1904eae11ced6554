use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

/// `YYYY-MM-DD` of the Monday starting the week that contains `date`.
pub fn week_start(date: Date) -> String {
    let monday = date - Duration::days(i64::from(date.weekday().number_days_from_monday()));
    monday
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

pub fn current_week_start() -> String {
    week_start(OffsetDateTime::now_utc().date())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2026-08-06 is a Thursday.
        assert_eq!(week_start(date!(2026 - 08 - 06)), "2026-08-03");
        assert_eq!(week_start(date!(2026 - 08 - 03)), "2026-08-03");
        assert_eq!(week_start(date!(2026 - 08 - 09)), "2026-08-03");
    }

    #[test]
    fn week_start_crosses_month_boundaries() {
        // 2026-03-01 is a Sunday belonging to the week of Feb 23.
        assert_eq!(week_start(date!(2026 - 03 - 01)), "2026-02-23");
    }
}
