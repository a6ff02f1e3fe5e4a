use echo_ui::api::{EchoApi, EchoBackend};
use std::env;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example echo_check <base-url>");
        std::process::exit(1);
    }

    let api = EchoApi::with_base(args[1].trim_end_matches('/'));
    println!("Requesting {}", api.request_url());

    match api.fetch_echo().await {
        Ok(body) => println!("echo results: {body}"),
        Err(err) => {
            eprintln!("echo request failed: {err}");
            std::process::exit(1);
        }
    }
}
