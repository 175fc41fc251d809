pub mod json;
pub mod menu;
mod training;

pub use menu::OffMenu;
pub use training::{TrainingConfig, TrainingConfigBuilder};
