//! Entry point for the auth server (register/login).

use textai::server::{self, Backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(Backend::Auth).await
}
