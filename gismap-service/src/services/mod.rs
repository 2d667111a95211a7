pub mod deep_link;
pub mod metrics;
pub mod store;

pub use deep_link::DeepLink;
pub use self::metrics::{get_metrics, init_metrics};
pub use store::{Store, UserOutcome};
