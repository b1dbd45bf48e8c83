//! Firmware tasks
//!
//! The smoke test is a single sequential loop; it runs on the main task.


pub use servo_test::{servo_test_task, Controller};
