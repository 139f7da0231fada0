use std::collections::BTreeMap;

use crate::model::day::Day;

/// Weekly plan: weekday -> ordered class names.
///
/// A class may appear on several days, and more than once on the same day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    days: BTreeMap<Day, Vec<String>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, day: Day, class_name: impl Into<String>) {
        self.days.entry(day).or_default().push(class_name.into());
    }

    pub fn classes_on(&self, day: Day) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days with at least one class, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[String])> {
        self.days.iter().map(|(day, classes)| (*day, classes.as_slice()))
    }

    /// Every (day, class) pair in schedule order.
    pub fn occurrences(&self) -> impl Iterator<Item = (Day, &str)> {
        self.iter()
            .flat_map(|(day, classes)| classes.iter().map(move |c| (day, c.as_str())))
    }

    pub fn occurrence_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut schedule = Schedule::new();
        schedule.add(Day::Friday, "Art");
        schedule.add(Day::Monday, "Math");
        schedule.add(Day::Monday, "Science");
        schedule.add(Day::Monday, "Math");

        assert_eq!(schedule.classes_on(Day::Monday), ["Math", "Science", "Math"]);
        assert!(schedule.classes_on(Day::Tuesday).is_empty());
        assert_eq!(schedule.occurrence_count(), 4);

        let days: Vec<Day> = schedule.iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec![Day::Monday, Day::Friday]);
    }
}
