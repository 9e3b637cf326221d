// Attendance token issuance and validation for class check-in flows.

pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;
