use chrono::NaiveDate;

/// Source of "today" for age derivation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
