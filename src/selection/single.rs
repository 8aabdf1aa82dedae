use super::Invalidation;
use crate::data::CalendarDate;

/// At most one selected date. Clicking it again deselects it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SingleSelection {
    selected: Option<CalendarDate>,
}

impl SingleSelection {
    pub fn select(&mut self, date: CalendarDate) -> Invalidation {
        let mut inv = Invalidation::date(date);
        match self.selected {
            Some(current) if current == date => {
                self.selected = None;
            }
            Some(current) => {
                inv.push_date(current);
                self.selected = Some(date);
            }
            None => {
                self.selected = Some(date);
            }
        }
        inv
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selected == Some(date)
    }

    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        self.selected.into_iter().collect()
    }

    pub fn clear(&mut self) -> Invalidation {
        match self.selected.take() {
            Some(date) => Invalidation::date(date),
            None => Invalidation::none(),
        }
    }

    pub fn restore(&mut self, dates: &[CalendarDate]) {
        self.selected = dates.first().copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn test_first_click_selects_and_invalidates_it() {
        let mut s = SingleSelection::default();
        let inv = s.select(d(2024, 6, 10));
        assert_eq!(inv.dates(), &[d(2024, 6, 10)]);
        assert_eq!(s.selected_dates(), vec![d(2024, 6, 10)]);
    }

    #[test]
    fn test_second_date_replaces_first() {
        let mut s = SingleSelection::default();
        s.select(d(2024, 6, 10));
        let inv = s.select(d(2024, 6, 12));
        assert!(inv.contains(d(2024, 6, 10)));
        assert!(inv.contains(d(2024, 6, 12)));
        assert_eq!(inv.dates().len(), 2);
        assert_eq!(s.selected_dates(), vec![d(2024, 6, 12)]);
        assert!(!s.is_selected(d(2024, 6, 10)));
    }

    #[test]
    fn test_same_date_twice_toggles_off() {
        let mut s = SingleSelection::default();
        s.select(d(2024, 6, 10));
        let inv = s.select(d(2024, 6, 10));
        assert_eq!(inv.dates(), &[d(2024, 6, 10)]);
        assert!(s.selected_dates().is_empty());
    }

    #[test]
    fn test_clear_invalidates_previous() {
        let mut s = SingleSelection::default();
        assert!(s.clear().is_empty());
        s.select(d(2024, 6, 10));
        assert_eq!(s.clear().dates(), &[d(2024, 6, 10)]);
        assert!(s.selected_dates().is_empty());
    }

    #[test]
    fn test_restore_keeps_first_date_only() {
        let mut s = SingleSelection::default();
        s.restore(&[d(2024, 6, 10), d(2024, 6, 11)]);
        assert_eq!(s.selected_dates(), vec![d(2024, 6, 10)]);
        s.restore(&[]);
        assert!(s.selected_dates().is_empty());
    }
}
