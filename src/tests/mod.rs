// Test modules for interview-outline crate
//
// Each source module has a matching test file focused on its contract.
// HTTP-level tests against a mock server live in the crate's tests/ directory.

// Test helper utilities (mock providers, sample inputs)
pub mod helpers;
