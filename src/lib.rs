pub mod cli;
pub mod error;
pub mod generator;
pub mod scanner;
pub mod ui;

pub use error::{Result, ScanError};
pub use scanner::{classify, TemplateProfile, TemplateScanner};
