//! Contact form server: `POST /submit-contact`.

use textai::server::{self, Backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(Backend::Contact).await
}
