pub mod file_processor;

pub use file_processor::{process_credits_with_processor, CreditsProcessor, DefaultCreditsProcessor};
