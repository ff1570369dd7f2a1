#[tokio::main]
async fn main() {
    protobuf_goto_language_server::run().await;
}
