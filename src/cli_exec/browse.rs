use pickdong::api::ApiError;
use pickdong::feed::{FeedLoader, PageTicket};
use pickdong::model::{Tour, TourId};
use pickdong::subscriptions::{Dashboard, SubscriptionBoard, SubscriptionSet};

use super::*;

pub(super) fn handle_subscriptions_command(client: &Client, all: bool, json: bool) -> Result<()> {
    require_member(client)?;
    let resp = client.api.get_subscriptions()?;
    let summary = SubscriptionSet::from_response(&resp);

    if all {
        let board = SubscriptionBoard::open(&client.api, &summary);
        if json {
            return print_json(&board.areas(), "subscription board");
        }
        for area in board.areas() {
            println!("{} ({})", area.name, area.area_code);
            for sub in &area.sub_areas {
                let mark = if sub.subscribe { "*" } else { " " };
                println!("  [{}] {} ({})", mark, sub.name, sub.sigun_gu_code);
            }
        }
        println!("{} subscribed", board.total_subscribed());
        return Ok(());
    }

    if json {
        return print_json(&summary, "subscriptions");
    }
    if summary.is_empty() {
        println!("No subscribed regions");
        return Ok(());
    }
    for (region, subs) in summary.iter() {
        println!("{}: {}", region, subs.join(", "));
    }
    Ok(())
}

pub(super) fn handle_subscribe_command(
    client: &Client,
    region: &str,
    sub_region: &str,
    subscribe: bool,
) -> Result<()> {
    require_member(client)?;
    let mut dash = Dashboard::new();
    dash.load_summary(&client.api)?;

    if subscribe {
        dash.subscribe(&client.api, region, sub_region)?;
        println!("Subscribed to {} {}", region, sub_region);
    } else {
        dash.unsubscribe(&client.api, region, sub_region)?;
        println!("Unsubscribed from {} {}", region, sub_region);
    }
    println!(
        "{} subscribed; feed now has {} event(s)",
        dash.summary.total(),
        dash.feed.tours().len()
    );
    Ok(())
}

pub(super) fn handle_feed_command(client: &Client, pages: u32, json: bool) -> Result<()> {
    require_member(client)?;
    let mut feed = FeedLoader::new();
    let ticket = feed
        .begin_reload()
        .context("feed loader refused the initial load")?;
    if let Some(err) = fetch_page(client, &mut feed, ticket)? {
        anyhow::bail!("load feed: {}", err);
    }

    let mut stopped = None;
    for _ in 1..pages {
        let Some(ticket) = feed.begin_next_page() else {
            break;
        };
        if let Some(err) = fetch_page(client, &mut feed, ticket)? {
            stopped = Some(err);
            break;
        }
    }

    if json {
        return print_json(
            &serde_json::json!({
                "tours": feed.tours(),
                "has_next": feed.has_next(),
                "error": stopped,
            }),
            "feed",
        );
    }
    if feed.tours().is_empty() {
        println!("No events in subscribed regions");
    }
    for tour in feed.tours() {
        print_tour_line(tour);
    }
    if let Some(err) = &stopped {
        eprintln!("warning: stopped loading further pages: {}", err);
    }
    if feed.has_next() {
        let loaded = feed.cursor().map_or(1, |c| c + 1);
        println!("(more: use --pages {})", loaded + 1);
    }
    Ok(())
}

/// Run one page request through the loader.
///
/// A rejected credential fails the command. Any other failure is applied to
/// the loader, which keeps what it already has, and returned as text.
fn fetch_page(client: &Client, feed: &mut FeedLoader, ticket: PageTicket) -> Result<Option<String>> {
    let result = client.api.get_subscribed_tours(ticket.page);
    if let Err(ApiError::Unauthorized) = result {
        return Err(ApiError::Unauthorized).context("get subscribed tours");
    }
    let failed = result.as_ref().err().map(ToString::to_string);
    feed.complete(ticket, result);
    Ok(failed)
}

fn print_tour_line(tour: &Tour) {
    let place = [tour.area.as_str(), tour.sigun_gu.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "{:>9}  {}  [{}]  {}",
        tour.tour_id,
        tour.title,
        place,
        tour.date_range()
    );
}

pub(super) fn handle_event_command(client: &Client, id: TourId, json: bool) -> Result<()> {
    let detail = client.api.get_tour_detail(id)?;
    if json {
        return print_json(&detail, "event");
    }

    println!("{}", detail.title);
    if !detail.keywords.is_empty() {
        println!("#{}", detail.keywords.join(" #"));
    }
    let ov = &detail.overview;
    let start = pickdong::model::display_date(&ov.event_start_date);
    let end = pickdong::model::display_date(&ov.event_end_date);
    if !start.is_empty() {
        println!("period: {} ~ {}", start, end);
    }
    for (label, value) in [
        ("hours", &ov.business_hours),
        ("duration", &ov.expected_duration),
        ("cost", &ov.cost),
        ("place", &detail.directions.event_place),
        ("address", &detail.directions.road_address),
        ("phone", &detail.directions.telephone),
    ] {
        if !value.is_empty() {
            println!("{}: {}", label, value);
        }
    }
    for info in &detail.detail_info {
        println!();
        println!("[{}]", info.info_name);
        println!("{}", info.info_text);
    }
    for url in &detail.images {
        println!("image: {}", url);
    }
    Ok(())
}
