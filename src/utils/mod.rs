pub mod time;

pub use time::{jittered_delay, sleep_with_jitter};
