//! Log query and filtering
//!
//! Filters persisted action logs by user, action label, and date range,
//! and paginates the result for display.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ActionLog;
use crate::store::EntityId;

/// Optional filters for listing action logs
///
/// All filters combine with AND. An empty action string means no action
/// filter. Date bounds are inclusive on both ends and independently
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogFilter {
    /// Exact user id match
    pub user_id: Option<EntityId>,

    /// Exact action label match
    pub action: Option<String>,

    /// Keep entries with `action_date >= start_date`
    pub start_date: Option<DateTime<Utc>>,

    /// Keep entries with `action_date <= end_date`
    pub end_date: Option<DateTime<Utc>>,
}

impl LogFilter {
    /// Build a filter covering whole days, inclusive on both ends
    ///
    /// A date-only start bound means midnight UTC; a date-only end bound
    /// means the last nanosecond of that day, so an entry stamped anywhere
    /// within the end day still matches.
    pub fn between_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            user_id: None,
            action: None,
            start_date: start.map(day_start),
            end_date: end.map(day_end),
        }
    }

    /// Set the user id filter (builder style)
    pub fn for_user(mut self, user_id: EntityId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the action filter (builder style)
    pub fn for_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    fn matches(&self, log: &ActionLog) -> bool {
        if let Some(user_id) = self.user_id {
            if log.user_id != user_id {
                return false;
            }
        }

        if let Some(action) = self.action.as_deref() {
            if !action.is_empty() && log.action != action {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if log.action_date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if log.action_date > end {
                return false;
            }
        }

        true
    }
}

/// One page of filtered action logs
#[derive(Debug, Clone, PartialEq)]
pub struct LogPage {
    /// The entries on this page
    pub items: Vec<ActionLog>,

    /// Current page number (1-based)
    pub current_page: usize,

    /// Total number of pages after filtering
    pub total_pages: usize,

    /// Distinct action labels across all entries, before any filtering,
    /// in first-seen order. Intended for presenting filter choices.
    pub available_actions: Vec<String>,
}

/// Filter and paginate action logs
///
/// `page` is 1-based; `page` and `page_size` are clamped to at least 1.
/// `available_actions` is computed over the unfiltered input.
pub fn filter_logs(logs: Vec<ActionLog>, filter: &LogFilter, page: usize, page_size: usize) -> LogPage {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let mut available_actions: Vec<String> = Vec::new();
    for log in &logs {
        if !available_actions.contains(&log.action) {
            available_actions.push(log.action.clone());
        }
    }

    let filtered: Vec<ActionLog> = logs.into_iter().filter(|log| filter.matches(log)).collect();

    let total_pages = filtered.len().div_ceil(page_size);
    let items: Vec<ActionLog> = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    LogPage {
        items,
        current_page: page,
        total_pages,
        available_actions,
    }
}

/// Midnight UTC at the start of the given day
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

/// Last nanosecond of the given day, UTC
fn day_end(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log_at(user_id: EntityId, action: &str, date: (i32, u32, u32)) -> ActionLog {
        let mut log = ActionLog::new(user_id, action, String::new());
        log.action_date = Utc
            .with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0)
            .unwrap();
        log
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let logs = vec![
            log_at(1, "AddNewUser", (2022, 1, 1)),
            log_at(2, "EditUser", (2022, 1, 2)),
        ];

        let page = filter_logs(logs, &LogFilter::default(), 1, 10);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_user_id_filter() {
        let logs = vec![
            log_at(1, "EditUser", (2022, 1, 1)),
            log_at(2, "EditUser", (2022, 1, 2)),
            log_at(1, "DeleteUser", (2022, 1, 3)),
        ];

        let filter = LogFilter::default().for_user(1);
        let page = filter_logs(logs, &filter, 1, 10);

        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|log| log.user_id == 1));
    }

    #[test]
    fn test_action_filter_exact_match() {
        let logs = vec![
            log_at(1, "EditUser", (2022, 1, 1)),
            log_at(1, "EditUserEmail", (2022, 1, 2)),
        ];

        let filter = LogFilter::default().for_action("EditUser");
        let page = filter_logs(logs, &filter, 1, 10);

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].action, "EditUser");
    }

    #[test]
    fn test_empty_action_filter_is_ignored() {
        let logs = vec![
            log_at(1, "EditUser", (2022, 1, 1)),
            log_at(1, "DeleteUser", (2022, 1, 2)),
        ];

        let filter = LogFilter::default().for_action("");
        let page = filter_logs(logs, &filter, 1, 10);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_date_range_inclusive() {
        let logs = vec![
            log_at(1, "EditUser", (2022, 1, 1)),
            log_at(1, "EditUser", (2022, 2, 1)),
        ];

        let filter = LogFilter::between_days(
            NaiveDate::from_ymd_opt(2022, 1, 1),
            NaiveDate::from_ymd_opt(2022, 1, 31),
        );
        let page = filter_logs(logs, &filter, 1, 10);

        assert_eq!(page.items.len(), 1);
        assert_eq!(
            page.items[0].action_date,
            Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_end_day_covers_whole_day() {
        // Entry stamped late in the end day still matches the date-only bound
        let mut log = ActionLog::new(1, "EditUser", String::new());
        log.action_date = Utc.with_ymd_and_hms(2022, 1, 31, 23, 59, 59).unwrap();

        let filter = LogFilter::between_days(None, NaiveDate::from_ymd_opt(2022, 1, 31));
        let page = filter_logs(vec![log], &filter, 1, 10);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_bounds_independent() {
        let logs = vec![
            log_at(1, "EditUser", (2021, 12, 31)),
            log_at(1, "EditUser", (2022, 1, 15)),
        ];

        let start_only = LogFilter::between_days(NaiveDate::from_ymd_opt(2022, 1, 1), None);
        let page = filter_logs(logs, &start_only, 1, 10);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_pagination() {
        let logs: Vec<ActionLog> = (0..11).map(|i| log_at(i, "EditUser", (2022, 1, 1))).collect();

        let page1 = filter_logs(logs.clone(), &LogFilter::default(), 1, 10);
        assert_eq!(page1.items.len(), 10);
        assert_eq!(page1.current_page, 1);
        assert_eq!(page1.total_pages, 2);

        let page2 = filter_logs(logs, &LogFilter::default(), 2, 10);
        assert_eq!(page2.items.len(), 1);
        assert_eq!(page2.current_page, 2);
        assert_eq!(page2.total_pages, 2);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let logs = vec![log_at(1, "EditUser", (2022, 1, 1))];
        let page = filter_logs(logs, &LogFilter::default(), 5, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_available_actions_ignore_filters() {
        let logs = vec![
            log_at(1, "AddNewUser", (2022, 1, 1)),
            log_at(2, "EditUser", (2022, 1, 2)),
            log_at(2, "EditUser", (2022, 1, 3)),
            log_at(3, "DeleteUser", (2022, 1, 4)),
        ];

        let filter = LogFilter::default().for_user(1);
        let page = filter_logs(logs, &filter, 1, 10);

        // Distinct set over all entries, first-seen order, despite the filter
        assert_eq!(
            page.available_actions,
            vec!["AddNewUser", "EditUser", "DeleteUser"]
        );
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let logs = vec![log_at(1, "EditUser", (2022, 1, 1))];
        let page = filter_logs(logs, &LogFilter::default(), 0, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 1);
    }
}
