use super::Invalidation;
use crate::data::CalendarDate;

/// Any number of dates, kept in the order they were clicked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipleSelection {
    selected: Vec<CalendarDate>,
}

impl MultipleSelection {
    /// Toggles membership of `date`. Only that date needs redrawing.
    pub fn select(&mut self, date: CalendarDate) -> Invalidation {
        match self.selected.iter().position(|&d| d == date) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(date),
        }
        Invalidation::date(date)
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selected.contains(&date)
    }

    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        self.selected.clone()
    }

    pub fn clear(&mut self) -> Invalidation {
        let mut inv = Invalidation::none();
        for date in self.selected.drain(..) {
            inv.push_date(date);
        }
        inv
    }

    pub fn restore(&mut self, dates: &[CalendarDate]) {
        self.selected.clear();
        for &date in dates {
            if !self.selected.contains(&date) {
                self.selected.push(date);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn test_clicks_keep_insertion_order() {
        let mut s = MultipleSelection::default();
        s.select(d(2024, 6, 20));
        s.select(d(2024, 6, 3));
        s.select(d(2024, 7, 1));
        assert_eq!(
            s.selected_dates(),
            vec![d(2024, 6, 20), d(2024, 6, 3), d(2024, 7, 1)]
        );
    }

    #[test]
    fn test_double_click_is_round_trip() {
        let mut s = MultipleSelection::default();
        s.select(d(2024, 6, 20));
        let before = s.clone();
        s.select(d(2024, 6, 3));
        s.select(d(2024, 6, 3));
        assert_eq!(s, before);
    }

    #[test]
    fn test_deselect_from_middle_keeps_order() {
        let mut s = MultipleSelection::default();
        s.select(d(2024, 6, 1));
        s.select(d(2024, 6, 2));
        s.select(d(2024, 6, 3));
        s.select(d(2024, 6, 2));
        assert_eq!(s.selected_dates(), vec![d(2024, 6, 1), d(2024, 6, 3)]);
    }

    #[test]
    fn test_invalidation_is_only_clicked_date() {
        let mut s = MultipleSelection::default();
        s.select(d(2024, 6, 1));
        let inv = s.select(d(2024, 6, 2));
        assert_eq!(inv.dates(), &[d(2024, 6, 2)]);
        let inv = s.select(d(2024, 6, 1));
        assert_eq!(inv.dates(), &[d(2024, 6, 1)]);
    }

    #[test]
    fn test_clear_invalidates_all_selected() {
        let mut s = MultipleSelection::default();
        s.select(d(2024, 6, 1));
        s.select(d(2024, 6, 9));
        let inv = s.clear();
        assert_eq!(inv.dates(), &[d(2024, 6, 1), d(2024, 6, 9)]);
        assert!(s.selected_dates().is_empty());
    }

    #[test]
    fn test_restore_drops_duplicates() {
        let mut s = MultipleSelection::default();
        s.restore(&[d(2024, 6, 1), d(2024, 6, 1), d(2024, 6, 2)]);
        assert_eq!(s.selected_dates(), vec![d(2024, 6, 1), d(2024, 6, 2)]);
    }
}
