#[tokio::main]
async fn main() {
    woodfired_backend::run().await;
}
