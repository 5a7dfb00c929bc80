use clap::Parser;
use std::sync::Arc;

use crate::forecast::RandomForecastProvider;

mod app;
mod forecast;
mod forecast_routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address and port to serve on.
    #[arg(short, long, env = "LISTEN_ADDR", default_value = "127.0.0.1:5041")]
    listen_addr: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    let app = app::create_app(Arc::new(RandomForecastProvider::new()));

    let listener = tokio::net::TcpListener::bind(&args.listen_addr)
        .await
        .expect("failed to bind listen address");
    log::info!("listening on {}", args.listen_addr);
    axum::serve(listener, app).await.unwrap();
}
