//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod annunciator;
pub mod controller;
pub mod display;
pub mod input;
pub mod stepper;
pub mod tick;

pub use annunciator::annunciator_task;
pub use controller::controller_task;
pub use display::display_task;
pub use input::input_task;
pub use stepper::stepper_task;
pub use tick::tick_task;
