mod fake_process_runner;

pub use fake_process_runner::FakeProcessRunner;
