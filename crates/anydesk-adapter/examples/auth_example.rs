/*
[INPUT]:  API key and license id from the command line
[OUTPUT]: Auth test result and license summary
[POS]:    Examples - signed request round trip
[UPDATE]: When auth flow changes
*/

use anydesk_adapter::*;

/// Example: verify credentials, then read the license snapshot
///
/// cargo run --example auth_example -- <apiKey> <licenseID>
#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("{} <apiKey> <licenseID>", args[0]);
        std::process::exit(1);
    }

    let client = match AnydeskClient::new(&args[1], &args[2]) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match client.auth_test().await {
        Ok(result) => println!("auth: {}", result.result.unwrap_or_default()),
        Err(e) => {
            if let Some(envelope) = e.envelope() {
                eprintln!("server said: {:?}", envelope.error);
            }
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    match client.sys_info().await {
        Ok(info) => println!(
            "{} ({}): {}/{} clients online",
            info.license.name, info.license.license_id, info.clients.online, info.clients.total
        ),
        Err(e) => eprintln!("Error: {e}"),
    }
}
