#[allow(dead_code)]
pub mod mocks;
#[allow(dead_code)]
pub mod test_utils;
