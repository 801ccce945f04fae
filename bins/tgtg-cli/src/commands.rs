//! Subcommand dispatch

use crate::output;
use crate::{Commands, Position};
use anyhow::{Context, Result};
use tgtg_api_client::endpoints::{
    BucketParams, DiscoverParams, ItemsNearbyParams, ManufacturerItemsParams, OrderRating,
};
use tgtg_api_client::TgtgClient;
use tracing::debug;

/// Run one subcommand and print its result
pub async fn run(client: &TgtgClient, command: &Commands, compact: bool) -> Result<()> {
    debug!(session = ?client.session(), base_url = %client.base_url(), "Dispatching command");

    let response = match command {
        Commands::Nearby { position } => client
            .location()
            .nearby_restaurants(position.lat, position.lon)
            .await
            .context("Nearby restaurants lookup failed")?,

        Commands::ActiveOrders => client
            .orders()
            .active()
            .await
            .context("Failed to fetch active orders")?,

        Commands::Me => client
            .user()
            .me_page()
            .await
            .context("Failed to fetch user page")?,

        Commands::Startup => client
            .app()
            .startup_info()
            .await
            .context("Failed to fetch startup info")?,

        Commands::Discover { position, radius } => {
            let params = DiscoverParams::new(position.lon, position.lat).with_radius(*radius);
            client
                .discover()
                .page(&params)
                .await
                .context("Failed to fetch discover page")?
        }

        Commands::Items {
            position,
            radius,
            stock_only,
        } => {
            let params = ItemsNearbyParams::new(position.lon, position.lat)
                .with_radius(*radius)
                .with_stock_only(*stock_only);
            client
                .items()
                .nearby(&params)
                .await
                .context("Item search failed")?
        }

        Commands::Store { store_id, position } => {
            let Position { lon, lat } = *position;
            client
                .stores()
                .info(lon, lat, store_id)
                .await
                .with_context(|| format!("Failed to fetch store {store_id}"))?
        }

        Commands::Item { item_id, position } => {
            let Position { lon, lat } = *position;
            client
                .items()
                .info(lon, lat, item_id)
                .await
                .with_context(|| format!("Failed to fetch item {item_id}"))?
        }

        Commands::ManufacturerItems {
            country,
            page,
            page_size,
        } => {
            let params = ManufacturerItemsParams::new()
                .with_country(country.clone())
                .with_page(*page, *page_size);
            client
                .items()
                .manufacturer(&params)
                .await
                .context("Failed to fetch manufacturer items")?
        }

        Commands::Bucket {
            position,
            radius,
            page,
            page_size,
            bucket_type,
        } => {
            let params = BucketParams::new(position.lon, position.lat)
                .with_radius(*radius)
                .with_page(*page, *page_size)
                .with_bucket_type(bucket_type.clone());
            client
                .discover()
                .bucket(&params)
                .await
                .with_context(|| format!("Failed to fetch bucket {bucket_type}"))?
        }

        Commands::Order { order_id } => client
            .orders()
            .info(order_id)
            .await
            .with_context(|| format!("Failed to fetch order {order_id}"))?,

        Commands::Rate {
            order_id,
            overall,
            content,
            service,
            feedback,
        } => {
            let rating = feedback
                .iter()
                .fold(OrderRating::new(*overall, *content, *service), |rating, tag| {
                    rating.with_feedback(tag.as_str())
                });
            let status = client
                .orders()
                .rate(order_id, &rating)
                .await
                .with_context(|| format!("Failed to rate order {order_id}"))?;
            output::print_status(status);
            return Ok(());
        }
    };

    output::print_json(&response, compact)
}
