pub mod field_value;
pub mod form_values;

pub use field_value::FieldValue;
pub use form_values::FormValues;
