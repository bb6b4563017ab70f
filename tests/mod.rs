mod common;
mod listener_tests;
mod property_tests;
mod resolution_tests;
mod review_api_tests;
