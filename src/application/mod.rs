pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;
pub mod use_cases;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
