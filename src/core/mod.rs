pub mod collector;
pub mod display;
pub mod engine;
pub mod session;

pub use crate::domain::model::{ConversionRequest, RateTable};
pub use crate::domain::ports::{ConfigProvider, Console};
pub use crate::utils::error::Result;
