mod graceful_errors;
mod harness;
mod helpers;
mod test_logger;

use harness::TestHarness;

#[tokio::test]
async fn initialize_server_test() {
    let mut harness = TestHarness::new();
    harness.initialize(&[], None, None).await;
    // A clean initialize/initialized exchange is the whole assertion.
}
