use anyhow::Result;

use crate::api::usgs;
use crate::model::event::Event;

pub async fn handle(url: &str) -> Result<()> {
    match load_event(url).await {
        Some(event) => render(&event),
        None => log::info!("no felt report to display"),
    }

    Ok(())
}

/// Resolves to the first reported event, or `None` when the fetch fails,
/// the body does not parse, or the result set is empty. Dropping the
/// future cancels the request.
pub async fn load_event(url: &str) -> Option<Event> {
    let body = match usgs::fetch_body(url).await {
        Ok(body) => body,
        Err(err) => {
            log::warn!("fetch felt report fail: {err}");
            return None;
        }
    };

    match usgs::extract_first_event(&body) {
        Ok(event) => event,
        Err(err) => {
            log::warn!("parse felt report fail: {err}");
            None
        }
    }
}

fn render(event: &Event) {
    println!("{}", event.title);
    println!("{} people felt it", event.num_of_people);
    println!("{}", event.perceived_strength);
}
