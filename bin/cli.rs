use anyhow::{Context, Result};
use clap::{App, Arg};
use local::analyzers::rarities::{rarity_score, TraitCensus};
use local::analyzers::Item;
use local::config::Settings;
use local::events::{normalize, normalize_in, Event};
use local::opensea::types::{AssetEvent, EventsResponse};
use std::fs::File;

#[derive(serde::Serialize)]
struct LinkedEvent {
    #[serde(flatten)]
    event: Event,
    url: String,
}

pub fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("opensea-activity")
        .version("0.1")
        .about("Ranks collection rarity and normalizes marketplace events")
        .arg(
            Arg::with_name("rarity")
                .short("r")
                .long("rarity")
                .value_name("ITEMS_JSON")
                .help("Ranks the items of one collection by trait rarity")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("normalize")
                .short("n")
                .long("normalize")
                .value_name("EVENTS_JSON")
                .help("Normalizes an OpenSea events response")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("tz")
                .long("tz")
                .value_name("OFFSET")
                .help("UTC offset for event times, e.g. +08:00")
                .takes_value(true),
        )
        .get_matches();

    let mut settings = Settings::from_env()?;
    if let Some(tz) = matches.value_of("tz") {
        settings.tz_offset(tz)?;
    }

    if let Some(path) = matches.value_of("rarity") {
        rank(path)?;
    }

    if let Some(path) = matches.value_of("normalize") {
        normalize_events(path, &settings)?;
    }

    Ok(())
}

fn rank(path: &str) -> Result<()> {
    let items: Vec<Item> = serde_json::from_reader(
        File::open(path).with_context(|| format!("opening {}", path))?,
    )
    .with_context(|| format!("decoding items from {}", path))?;

    let census = TraitCensus::from_items(&items);
    for t in census.types() {
        log::info!(
            "{}: {} values over {} items",
            t,
            census.values(t).len(),
            census.type_count(t)
        );
    }

    let rarities = rarity_score(&items);
    log::info!("Ranked {} items", rarities.len());

    println!("{}", serde_json::to_string_pretty(&rarities)?);
    Ok(())
}

fn normalize_events(path: &str, settings: &Settings) -> Result<()> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path))?;

    // either the full `/events` response or a bare list of events
    let raw: Vec<AssetEvent> = match serde_json::from_str::<EventsResponse>(&text) {
        Ok(resp) => resp.asset_events,
        Err(_) => serde_json::from_str(&text)
            .with_context(|| format!("decoding events from {}", path))?,
    };

    let events = raw
        .iter()
        .map(|e| match &settings.tz_offset {
            Some(tz) => normalize_in(e, tz),
            None => normalize(e),
        })
        .map(|event| LinkedEvent {
            url: event.asset_url(&settings.market_url),
            event,
        })
        .collect::<Vec<_>>();
    log::info!("Normalized {} events", events.len());

    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}
