pub mod fields;
pub mod validate;

pub use fields::FieldValues;
pub use validate::is_valid_email_list;
