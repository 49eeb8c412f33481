#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
