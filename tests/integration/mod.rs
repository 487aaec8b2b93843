//! Integration tests against a mock HTTP server

mod report_tests;
