#[tokio::main]
async fn main() {
    consultation_backend::run().await;
}
