use rmcp::{ServiceExt, transport::stdio};
use test_mcp_server::{Config, Server};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Server error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let server = Server::new(config);

    // stdout carries the protocol, diagnostics stay on stderr
    eprintln!("Test long-running MCP server started");

    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
