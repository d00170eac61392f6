pub mod application;
pub mod collectors;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod plan;
pub mod ports;
pub mod utils;

#[cfg(test)]
mod test_utils;
