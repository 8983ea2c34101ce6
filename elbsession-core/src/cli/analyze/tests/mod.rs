mod render_tests;
mod run_tests;
