//! Integration tests
//!
//! Drive the screens through the app state the way the UI loop does, minus
//! the drawing.

pub mod forgot_password_test;
pub mod sign_in_test;
pub mod sign_up_test;
