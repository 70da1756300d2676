use super::RosterApp;
use crate::services::roster::MonthRef;
use chrono::{Datelike, Local};

impl RosterApp {
    pub(super) fn navigate_previous_month(&mut self) {
        self.current_month = self.current_month.previous();
    }

    pub(super) fn navigate_next_month(&mut self) {
        self.current_month = self.current_month.next();
    }

    pub(super) fn jump_to_current_month(&mut self) {
        let today = Local::now().date_naive();
        self.current_month = MonthRef::new(today.year(), today.month());
    }
}
