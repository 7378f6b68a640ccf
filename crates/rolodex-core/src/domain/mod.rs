pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{validate_birthday, Birthday, BIRTHDAY_FORMAT};
pub use name::{name_key, normalize_name};
pub use phone::{looks_like_phone, validate_phone, PhoneNumber, PHONE_DIGITS};
pub use record::ContactRecord;
