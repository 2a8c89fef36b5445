#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quizowl_backend::run().await
}
