#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recitation_backend::run().await
}
