//! Small form and feedback primitives used across the screens.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::{FieldError, Label};

mod toast;
pub use toast::{use_notices, ToastProvider};
