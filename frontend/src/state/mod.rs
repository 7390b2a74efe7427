pub mod payroll;
pub mod session;
