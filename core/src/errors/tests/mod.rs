//! Tests for the error model

mod app_error_tests;
mod conversion_tests;
