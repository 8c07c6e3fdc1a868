//! Guess input validation.
//!
//! `validate` turns raw text from a front end into an in-range integer or
//! a typed `InputError` the front end can render.

mod validator;

pub use validator::{validate, InputError};
