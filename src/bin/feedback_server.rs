//! Feedback server: `POST /submit_feedback`.

use textai::server::{self, Backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(Backend::Feedback).await
}
