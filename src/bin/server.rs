//! Strategy server binary
//!
//! Serves solve, analysis and batch-training endpoints over HTTP.
//! Configuration comes from flags or the environment.

use clap::Parser;
use gtoserve::*;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    log();
    hosting::Server::run(hosting::Config::parse()).await
}
