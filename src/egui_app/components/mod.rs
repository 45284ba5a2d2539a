//! Presentation primitives shared by the screens.
//!
//! These carry no business logic beyond their own local toggles.

pub mod alert;
pub mod button;
pub mod input;
pub mod language_toggle;

pub use alert::{Alert, AlertQueue};
pub use button::{AppButton, ButtonSize, ButtonState, ButtonStyle, ButtonVariant};
pub use input::TextField;
