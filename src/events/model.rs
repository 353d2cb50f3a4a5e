use chrono::NaiveDate;

/// Which of the event-type letters (`d`, `g`, `m`, `=`) a line carried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventKinds {
    /// `d`: an anniversary; recurrences get a localized "(N years)" suffix.
    pub anniversary: bool,
    /// `g`: a generic event.
    pub generic: bool,
    /// `m`: the day is marked as a day off in the month grid.
    pub day_off: bool,
    /// `=`: the event does not recur yearly.
    pub non_recurring: bool,
}

/// One calendar entry, already expanded to a concrete date.
///
/// The reader emits events ordered ascending by date; renderers rely on that
/// order and never mutate an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub kinds: EventKinds,
    pub text: String,
}

impl Event {
    /// Whether the event date falls within `[start, end]`, both inclusive.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }

    /// Whether the month grid should style this date as a day off.
    pub fn marks_day_off(&self) -> bool {
        self.kinds.day_off
    }
}

#[cfg(test)]
#[path = "../../tests/unit/events/model.rs"]
mod tests;
