//! Demo driver for the smart coffee machine.
//!
//! Walks the machine through the scripted consumer flow: inspect resources,
//! top up the water level, brew three large lattes, register a daily
//! espresso, then force the maintenance flag by writing the served counter.

use coffee_machine::clients::ApplianceOps;
use coffee_machine::gate::ScopeSet;
use coffee_machine::lifecycle::{setup_tracing, CoffeeMachine};
use coffee_machine::model::{BrewParams, Mode, ScheduleParams};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting coffee machine");
    let machine = CoffeeMachine::new();

    // Watch for maintenance and low-resource notifications.
    let mut events = machine.subscribe();
    let watcher = tokio::spawn(async move {
        while let Ok(notification) = events.recv().await {
            info!(%notification, "Notification received");
        }
    });

    // Scopes as the token endpoint would grant them to the demo client.
    let client = machine.gate(ScopeSet::parse("user coffee_user"));

    let resources = client.read_all_resources().await?;
    info!(?resources, "Available resources");

    client.write_resource_level(Some("water"), 80).await?;
    let water = client.read_resource_level(Some("water")).await?;
    info!(water, "Updated water level");

    let brew = client
        .make_drink(BrewParams {
            drink_id: Some("latte".to_string()),
            size: Some("l".to_string()),
            quantity: Some(3),
        })
        .await?;
    info!(result = brew.result, message = %brew.message, "makeDrink");

    let resources = client.read_all_resources().await?;
    info!(?resources, "Resources after brewing");

    let scheduled = client
        .set_schedule(ScheduleParams {
            drink_id: Some("espresso".to_string()),
            size: Some("m".to_string()),
            quantity: Some(2),
            time: Some("10:00".to_string()),
            mode: Some(Mode::Everyday),
        })
        .await?;
    info!(result = scheduled.result, message = %scheduled.message, "setSchedule");

    let schedules = client.read_schedules().await?;
    info!(count = schedules.len(), "Scheduled brews");

    // Force maintenance by pushing the served counter over the threshold.
    client.write_served_counter(1001).await?;
    let maintenance = client.read_maintenance().await?;
    info!(maintenance, "Maintenance flag");

    drop(client);
    machine.shutdown().await?;
    let _ = watcher.await;

    Ok(())
}
