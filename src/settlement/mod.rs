pub mod calendar;
pub mod effective_date;
pub mod installments;

pub use calendar::{add_months, days_in_month, is_leap_year};
pub use effective_date::{card_effective_date, effective_date, legacy_effective_date};
pub use installments::{split_into_installments, Installment};
