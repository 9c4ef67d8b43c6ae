pub mod notifier;
pub mod relay;

pub use notifier::{Notifier, SimulatedNotifier};
pub use relay::RelayService;
