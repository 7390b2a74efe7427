pub mod payroll;

pub use payroll::PayrollPage;
