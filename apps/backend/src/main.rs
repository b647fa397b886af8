#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sat_prep_backend::run().await
}
