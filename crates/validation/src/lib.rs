//! Form and field validation for Rolodex.
//!
//! All validators are pure functions: they never mutate their input, never
//! panic and never perform I/O. Field checks return booleans (or a
//! [`PasswordCheck`] report); form-level validators compose them into a
//! [`FieldErrors`] map of field name to human-readable message. A form is
//! valid iff its error map is empty.

mod fields;
mod forms;

pub use fields::*;
pub use forms::*;
