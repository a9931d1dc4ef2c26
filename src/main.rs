#[tokio::main]
async fn main() {
    paytrack_backend::run().await;
}
