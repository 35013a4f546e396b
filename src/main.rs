#[tokio::main]
async fn main() -> anyhow::Result<()> {
    formpilot_lib::run().await
}
