//! Month-view calendar used to pick an attendance date.

use crate::error::FormError;
use crate::redirect;
use chrono::{Datelike, NaiveDate};

/// One displayed month. Always normalized to a valid year/month pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Heading such as "2025年 7月".
    pub fn label(&self) -> String {
        format!("{}年 {}月", self.year, self.month)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(following)) => (following - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Sunday-first weeks; `None` pads the first and last week.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_sunday() as usize;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        for day in 1..=self.days_in_month() {
            let slot = (offset + day as usize - 1) % 7;
            week[slot] = Some(day);
            if slot == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        weeks
    }
}

/// Calendar widget state: shown month, today marker and the picked date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    view: MonthView,
    today: NaiveDate,
    selected: Option<NaiveDate>,
}

impl Calendar {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: MonthView::containing(today),
            today,
            selected: None,
        }
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn show_previous_month(&mut self) {
        self.view = self.view.previous();
    }

    pub fn show_next_month(&mut self) {
        self.view = self.view.next();
    }

    pub fn is_today(&self, day: u32) -> bool {
        self.date_in_view(day) == Some(self.today)
    }

    /// Only true while the selected date's month is on screen.
    pub fn is_selected(&self, day: u32) -> bool {
        self.selected.is_some() && self.date_in_view(day) == self.selected
    }

    fn date_in_view(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.view.year, self.view.month, day)
    }

    /// Select a day of the shown month, replacing any earlier selection.
    pub fn select_day(&mut self, day: u32) -> Result<NaiveDate, FormError> {
        let date = self.date_in_view(day).ok_or(FormError::InvalidDay {
            year: self.view.year,
            month: self.view.month,
            day,
        })?;
        self.selected = Some(date);
        Ok(date)
    }

    /// "2025年7月15日", or the placeholder dash before anything is picked.
    pub fn selected_label(&self) -> String {
        match self.selected {
            Some(date) => date_label(date),
            None => "―".to_string(),
        }
    }

    /// Redirect target for the confirm button.
    pub fn confirm(&self, form_path: &str) -> Result<String, FormError> {
        let date = self.selected.ok_or(FormError::NoDateSelected)?;
        Ok(redirect::with_query(form_path, "date", &date_label(date)))
    }
}

pub fn date_label(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}
