pub mod cipher;
pub mod file_adapter;
pub mod shell;

pub use crate::domain::model::{Mode, Payload, Request, Shift, Source};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
