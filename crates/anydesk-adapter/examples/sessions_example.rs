/*
[INPUT]:  API key and license id from the command line
[OUTPUT]: Sessions of the last 24 hours
[POS]:    Examples - list query construction
[UPDATE]: When session query parameters change
*/

use anydesk_adapter::*;
use chrono::{Duration, Utc};

/// Example: sessions started during the last day, newest first
///
/// cargo run --example sessions_example -- <apiKey> <licenseID>
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

    let query = SessionsQuery {
        time_after: Some(Utc::now() - Duration::hours(24)),
        sort: Some(SessionSort::StartTime),
        order: SortOrder::Desc,
        ..SessionsQuery::default()
    };

    match client.sessions(&query).await {
        Ok(list) => {
            println!("{} of {} sessions", list.selected, list.count);
            for session in list.list {
                println!(
                    "{} {} -> {} {}s {}",
                    session.sid,
                    session.from.cid,
                    session.to.cid,
                    session.duration,
                    if session.active { "active" } else { "closed" }
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
