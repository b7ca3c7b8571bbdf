//! Next-departure selection with wrap-around to the following day.
//!
//! A daily timetable repeats, so once today's last departure has gone the
//! next ones are tomorrow's first. Selection sorts a copy of the schedule by
//! departure time, takes everything at or after "now", and tops up from the
//! start of the day when that runs short.

use crate::domain::{ClockTime, Journey};

/// How many departures a board shows.
pub const BOARD_SIZE: usize = 3;

/// Anything with a scheduled departure time of day.
pub trait Departs {
    /// The time of day this entry departs.
    fn departs(&self) -> ClockTime;
}

impl Departs for ClockTime {
    fn departs(&self) -> ClockTime {
        *self
    }
}

impl Departs for Journey {
    fn departs(&self) -> ClockTime {
        self.depart
    }
}

impl<T: Departs + ?Sized> Departs for &T {
    fn departs(&self) -> ClockTime {
        (**self).departs()
    }
}

/// Select the next `count` departures at or after `now`.
///
/// Entries departing exactly at `now` count as upcoming. Entries with equal
/// departure times keep their schedule order. If fewer than `count` remain
/// today, the result continues from the earliest departures of the day.
/// No entry appears twice, so a schedule shorter than `count` yields all of
/// its entries.
///
/// The schedule is never modified; the result borrows from it.
///
/// # Examples
///
/// ```
/// use departures_server::domain::ClockTime;
/// use departures_server::selector::next_departures;
///
/// let t = |s| ClockTime::parse_hhmm(s).unwrap();
/// let schedule = [t("07:10"), t("08:00"), t("09:30"), t("17:45")];
///
/// let next = next_departures(&schedule, t("08:15"), 3);
/// assert_eq!(next, [&t("09:30"), &t("17:45"), &t("07:10")]);
/// ```
pub fn next_departures<T: Departs>(schedule: &[T], now: ClockTime, count: usize) -> Vec<&T> {
    let mut sorted: Vec<&T> = schedule.iter().collect();
    // sort_by_key is stable, which keeps ties in schedule order
    sorted.sort_by_key(|entry| entry.departs());

    let split = sorted.partition_point(|entry| entry.departs() < now);
    let (earlier, remaining) = sorted.split_at(split);

    remaining
        .iter()
        .chain(earlier)
        .take(count)
        .copied()
        .collect()
}

/// Select the next three departures at or after `now`.
///
/// See [`next_departures`].
pub fn next_three<T: Departs>(schedule: &[T], now: ClockTime) -> Vec<&T> {
    next_departures(schedule, now, BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn times(list: &[&str]) -> Vec<ClockTime> {
        list.iter().map(|s| t(s)).collect()
    }

    fn render(result: &[&ClockTime]) -> Vec<String> {
        result.iter().map(|c| c.to_string()).collect()
    }

    fn journey(origin: &str, depart: &str, arrive: &str, via: &str) -> Journey {
        Journey::new(origin, t(depart), t(arrive), via)
    }

    #[test]
    fn takes_next_three_and_wraps() {
        let schedule = times(&["07:10", "08:00", "09:30", "17:45"]);

        let next = next_three(&schedule, t("08:15"));

        assert_eq!(render(&next), ["09:30", "17:45", "07:10"]);
    }

    #[test]
    fn short_schedule_returns_everything() {
        let schedule = times(&["07:10", "08:00"]);

        let next = next_three(&schedule, t("06:00"));

        assert_eq!(render(&next), ["07:10", "08:00"]);
    }

    #[test]
    fn short_schedule_wrap_does_not_duplicate() {
        let schedule = times(&["07:10", "08:00"]);

        let next = next_three(&schedule, t("07:30"));

        assert_eq!(render(&next), ["08:00", "07:10"]);
    }

    #[test]
    fn all_passed_shows_tomorrows_first_three() {
        let schedule = times(&["23:50", "00:10", "12:00"]);

        let next = next_three(&schedule, t("23:55"));

        assert_eq!(render(&next), ["00:10", "12:00", "23:50"]);
    }

    #[test]
    fn plenty_remaining_does_not_wrap() {
        let schedule = times(&["18:00", "06:00", "09:00", "12:00", "15:00"]);

        let next = next_three(&schedule, t("08:59"));

        assert_eq!(render(&next), ["09:00", "12:00", "15:00"]);
    }

    #[test]
    fn departure_at_now_is_included() {
        let schedule = times(&["07:10", "08:00", "09:30", "17:45"]);

        let next = next_three(&schedule, t("17:45"));

        assert_eq!(render(&next), ["17:45", "07:10", "08:00"]);
    }

    #[test]
    fn midnight_now_takes_first_three() {
        let schedule = times(&["05:30", "00:00", "23:59", "12:00"]);

        let next = next_three(&schedule, ClockTime::MIDNIGHT);

        assert_eq!(render(&next), ["00:00", "05:30", "12:00"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let schedule = times(&["09:00", "08:00", "09:00", "10:00"]);

        let next = next_three(&schedule, t("08:30"));

        assert_eq!(render(&next), ["09:00", "09:00", "10:00"]);
    }

    #[test]
    fn empty_schedule_gives_empty_result() {
        let schedule: Vec<ClockTime> = Vec::new();

        assert!(next_three(&schedule, t("12:00")).is_empty());
    }

    #[test]
    fn schedule_is_left_untouched() {
        let schedule = times(&["17:45", "07:10", "09:30", "08:00"]);
        let before = schedule.clone();

        let _ = next_three(&schedule, t("08:15"));

        assert_eq!(schedule, before);
    }

    #[test]
    fn custom_count() {
        let schedule = times(&["07:10", "08:00", "09:30", "17:45"]);

        assert_eq!(render(&next_departures(&schedule, t("08:15"), 1)), ["09:30"]);
        assert!(next_departures(&schedule, t("08:15"), 0).is_empty());
        assert_eq!(next_departures(&schedule, t("08:15"), 10).len(), 4);
    }

    #[test]
    fn journeys_sorted_by_depart_and_passed_through() {
        let schedule = vec![
            journey("Docklands", "17:30", "18:10", "Clonsilla"),
            journey("Connolly", "16:50", "17:35", "Clonsilla"),
            journey("Connolly", "18:05", "18:52", "Maynooth"),
            journey("Docklands", "07:15", "07:58", "Clonsilla"),
        ];

        let next = next_three(&schedule, t("17:00"));

        assert_eq!(next.len(), 3);
        assert_eq!(*next[0], schedule[0]);
        assert_eq!(*next[1], schedule[2]);
        assert_eq!(*next[2], schedule[3]);
        assert_eq!(next[1].via, "Maynooth");
        assert_eq!(next[1].arrive, t("18:52"));
    }

    #[test]
    fn journeys_with_equal_departures_keep_schedule_order() {
        let schedule = vec![
            journey("Connolly", "17:30", "18:10", "Clonsilla"),
            journey("Docklands", "17:30", "18:15", "Clonsilla"),
        ];

        let next = next_three(&schedule, t("17:30"));

        assert_eq!(next[0].origin, "Connolly");
        assert_eq!(next[1].origin, "Docklands");
    }

    #[test]
    fn works_over_borrowed_entries() {
        let owned = times(&["10:00", "11:00"]);
        let borrowed: Vec<&ClockTime> = owned.iter().collect();

        let next = next_three(&borrowed, t("10:30"));

        assert_eq!(next.len(), 2);
        assert_eq!(**next[0], t("11:00"));
    }
}
