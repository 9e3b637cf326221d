pub mod format_remaining;
pub mod issue_token;
pub mod proximity;
pub mod validate_token;

#[cfg(test)]
pub(crate) mod test_support;
