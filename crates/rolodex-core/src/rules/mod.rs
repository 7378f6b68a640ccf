pub mod birthdays;

pub use birthdays::{
    is_leap_year, next_congratulation, next_occurrence, roll_forward_weekend,
    validate_window_days, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
