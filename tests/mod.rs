mod support;

mod polling_tests;
mod status_controller_tests;
