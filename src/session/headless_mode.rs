//! Headless mode execution
//!
//! Performs one combined refresh and prints the briefing to stdout.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::dashboard::utils::{first_price, format_price, format_published, format_temperature};
use crate::workers::core::{Command, Update};
use crate::workers::refresher::RefreshOutcome;
use std::error::Error;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Dispatching a single combined refresh
/// 2. Console logging of worker events
/// 3. Printing each slice (or a failure note) once the refresh settles
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    // Print session start message
    print_session_starting("headless", &session.settings);

    session
        .command_sender
        .send(Command::Refresh(session.settings.clone()))
        .await?;

    // Event loop: log events until the refresh settles
    while let Some(update) = session.update_receiver.recv().await {
        match update {
            Update::Activity(event) => println!("{}", event),
            Update::Refreshed(outcome) => print_briefing(&outcome),
            Update::Loading(false) => break,
            Update::Loading(true) | Update::History(_) => {}
        }
    }

    // Wait for the worker to finish
    print_session_shutdown();
    let _ = session.shutdown_sender.send(());
    drop(session.command_sender);
    let _ = session.join_handle.await;
    print_session_exit_success();

    Ok(())
}

fn print_briefing(outcome: &RefreshOutcome) {
    println!();
    match &outcome.weather {
        Ok(weather) => println!(
            "Weather   {}: {} ({})",
            weather.city,
            format_temperature(weather.temperature),
            weather.description
        ),
        Err(_) => println!("Weather   unavailable"),
    }

    match &outcome.crypto {
        Ok(snapshot) => {
            for (coin, prices) in snapshot {
                let value = first_price(prices)
                    .map(format_price)
                    .unwrap_or_else(|| "—".to_string());
                println!("Crypto    {}: {}", coin, value);
            }
        }
        Err(_) => println!("Crypto    unavailable"),
    }

    match &outcome.quote {
        Ok(quote) => match &quote.author {
            Some(author) => println!("Quote     \u{201c}{}\u{201d} — {}", quote.text, author),
            None => println!("Quote     \u{201c}{}\u{201d}", quote.text),
        },
        Err(_) => println!("Quote     unavailable"),
    }

    match &outcome.headlines {
        Ok(items) => {
            println!("News      {} headlines", items.len());
            for headline in items {
                match &headline.published {
                    Some(published) => println!(
                        "  - [{}] {} ({})",
                        headline.source,
                        headline.title,
                        format_published(published)
                    ),
                    None => println!("  - [{}] {}", headline.source, headline.title),
                }
            }
        }
        Err(_) => println!("News      unavailable"),
    }
    println!();
}
