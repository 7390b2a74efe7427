pub mod client;
mod payroll;
pub mod types;

pub use client::*;
pub use types::*;
