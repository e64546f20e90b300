//! External converter integration

pub mod process;
pub mod traits;

pub use process::ProcessConverter;
pub use traits::Converter;
