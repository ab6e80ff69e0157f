use coffee_machine::clients::ApplianceOps;
use coffee_machine::gate::ScopeSet;
use coffee_machine::lifecycle::CoffeeMachine;
use coffee_machine::model::{BrewParams, Mode, ResourceId, ScheduleParams};
use coffee_machine::notify::{Notification, Property};
use tokio::sync::broadcast::error::TryRecvError;

fn coffee_user() -> ScopeSet {
    ScopeSet::parse("user coffee_user")
}

fn latte_l(quantity: u8) -> BrewParams {
    BrewParams {
        drink_id: Some("latte".to_string()),
        size: Some("l".to_string()),
        quantity: Some(quantity),
    }
}

/// Full end-to-end flow mirroring a remote consumer session.
#[tokio::test]
async fn test_full_machine_flow() {
    let machine = CoffeeMachine::new();
    let client = machine.gate(coffee_user());

    // A fresh machine is full.
    let resources = client.read_all_resources().await.expect("read resources");
    for id in ResourceId::ALL {
        assert_eq!(resources[&id], 100);
    }

    // Top up (well, down) the water level and read it back.
    client
        .write_resource_level(Some("water"), 80)
        .await
        .expect("write water");
    let water = client
        .read_resource_level(Some("water"))
        .await
        .expect("read water");
    assert_eq!(water, 80);

    // Brew three large lattes.
    let brew = client.make_drink(latte_l(3)).await.expect("make drink");
    assert!(brew.result);
    assert_eq!(brew.message, "Your latte is brewing!");

    let resources = client.read_all_resources().await.expect("read resources");
    assert_eq!(resources[&ResourceId::Water], 79);
    assert_eq!(resources[&ResourceId::Milk], 98);
    assert_eq!(resources[&ResourceId::Chocolate], 100);
    assert_eq!(resources[&ResourceId::CoffeeBeans], 98);
    assert_eq!(client.read_served_counter().await.expect("counter"), 3);

    // Schedule a daily espresso.
    let scheduled = client
        .set_schedule(ScheduleParams {
            drink_id: Some("espresso".to_string()),
            size: Some("m".to_string()),
            quantity: Some(2),
            time: Some("10:00".to_string()),
            mode: Some(Mode::Everyday),
        })
        .await
        .expect("set schedule");
    assert!(scheduled.result);
    assert_eq!(scheduled.message, "Schedule set!");
    assert_eq!(client.read_schedules().await.expect("schedules").len(), 1);

    // Force maintenance.
    client.write_served_counter(1001).await.expect("counter");
    assert!(client.read_maintenance().await.expect("maintenance"));

    drop(client);
    machine.shutdown().await.expect("shutdown");
}

/// The worked brew-arithmetic example: three large lattes against a full
/// machine.
#[tokio::test]
async fn test_brew_consumes_exact_amounts() {
    let machine = CoffeeMachine::new();
    let client = machine.gate(coffee_user());

    let brew = client.make_drink(latte_l(3)).await.expect("make drink");
    assert!(brew.result);

    let resources = client.read_all_resources().await.expect("resources");
    assert_eq!(resources[&ResourceId::Water], 99);
    assert_eq!(resources[&ResourceId::Milk], 98);
    assert_eq!(resources[&ResourceId::Chocolate], 100);
    assert_eq!(resources[&ResourceId::CoffeeBeans], 98);
    assert_eq!(client.read_served_counter().await.expect("counter"), 3);

    drop(client);
    machine.shutdown().await.expect("shutdown");
}

/// A depleted brew reports the failing resource, emits the event, and leaves
/// the machine untouched.
#[tokio::test]
async fn test_out_of_resource_brew_rolls_back() {
    let machine = CoffeeMachine::new();
    let client = machine.gate(coffee_user());
    let mut events = machine.subscribe();

    client
        .write_resource_level(Some("milk"), 1)
        .await
        .expect("write milk");

    // Three large lattes need 2 milk; only 1 is left.
    let brew = client.make_drink(latte_l(3)).await.expect("make drink");
    assert!(!brew.result);
    assert_eq!(brew.message, "milk too low");

    let event = events.recv().await.expect("event");
    assert_eq!(
        event,
        Notification::OutOfResource {
            resource: ResourceId::Milk,
            level: -1,
        }
    );

    // Nothing was charged and nothing was served.
    let resources = client.read_all_resources().await.expect("resources");
    assert_eq!(resources[&ResourceId::Water], 100);
    assert_eq!(resources[&ResourceId::Milk], 1);
    assert_eq!(resources[&ResourceId::CoffeeBeans], 100);
    assert_eq!(client.read_served_counter().await.expect("counter"), 0);

    drop(client);
    machine.shutdown().await.expect("shutdown");
}

/// Crossing the served-counter threshold raises exactly one property-change
/// notification; staying below raises none.
#[tokio::test]
async fn test_maintenance_threshold_notification() {
    let machine = CoffeeMachine::new();
    let client = machine.gate(coffee_user());
    let mut events = machine.subscribe();

    client.write_served_counter(999).await.expect("counter");
    assert!(!client.read_maintenance().await.expect("maintenance"));
    // The read above is the sync point: the 999 write has been processed and
    // published nothing.
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

    client.write_served_counter(1001).await.expect("counter");
    assert!(client.read_maintenance().await.expect("maintenance"));
    assert_eq!(
        events.recv().await.expect("event"),
        Notification::PropertyChanged {
            property: Property::MaintenanceNeeded,
        }
    );
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

    drop(client);
    machine.shutdown().await.expect("shutdown");
}

/// Schedules missing required fields are soft failures and never land in the
/// registry.
#[tokio::test]
async fn test_schedule_missing_fields_is_soft_failure() {
    let machine = CoffeeMachine::new();
    let client = machine.gate(coffee_user());

    let missing_time = client
        .set_schedule(ScheduleParams {
            mode: Some(Mode::Once),
            ..ScheduleParams::default()
        })
        .await
        .expect("set schedule");
    assert!(!missing_time.result);
    assert_eq!(missing_time.message, "Missing required time/mode");

    let missing_mode = client
        .set_schedule(ScheduleParams {
            time: Some("07:30".to_string()),
            ..ScheduleParams::default()
        })
        .await
        .expect("set schedule");
    assert!(!missing_mode.result);

    assert!(client.read_schedules().await.expect("schedules").is_empty());

    drop(client);
    machine.shutdown().await.expect("shutdown");
}

/// Concurrent brews that jointly exceed the available beans: exactly the
/// depletions that fit commit, and no level ever goes negative.
#[tokio::test]
async fn test_concurrent_brews_never_go_negative() {
    let machine = CoffeeMachine::new();
    let client = machine.gate(coffee_user());

    // One medium espresso consumes 1 water and 1 coffee bean unit. Leave
    // room for exactly three.
    client
        .write_resource_level(Some("coffeeBeans"), 3)
        .await
        .expect("write beans");

    let mut handles = Vec::new();
    for _ in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .make_drink(BrewParams {
                    drink_id: Some("espresso".to_string()),
                    size: Some("m".to_string()),
                    quantity: Some(1),
                })
                .await
                .expect("make drink")
        }));
    }

    let mut brewed = 0;
    let mut refused = 0;
    for handle in handles {
        let outcome = handle.await.expect("join");
        if outcome.result {
            brewed += 1;
        } else {
            assert_eq!(outcome.message, "coffeeBeans too low");
            refused += 1;
        }
    }
    assert_eq!(brewed, 3);
    assert_eq!(refused, 7);

    let resources = client.read_all_resources().await.expect("resources");
    assert_eq!(resources[&ResourceId::CoffeeBeans], 0);
    assert_eq!(resources[&ResourceId::Water], 97);
    assert_eq!(client.read_served_counter().await.expect("counter"), 3);

    drop(client);
    machine.shutdown().await.expect("shutdown");
}

/// Validation failures are hard errors, distinct from soft outcomes.
#[tokio::test]
async fn test_validation_errors_are_hard_failures() {
    let machine = CoffeeMachine::new();
    let client = machine.gate(coffee_user());

    let err = client
        .make_drink(BrewParams {
            drink_id: Some("tea".to_string()),
            ..BrewParams::default()
        })
        .await
        .expect_err("unknown drink must fail");
    assert_eq!(err.to_string(), "Unknown drink: tea");

    let err = client
        .read_resource_level(None)
        .await
        .expect_err("missing id must fail");
    assert_eq!(err.to_string(), "Missing or invalid 'id'");

    let err = client
        .write_resource_level(Some("water"), 250)
        .await
        .expect_err("out of range must fail");
    assert_eq!(err.to_string(), "Resource level 250 outside [0, 100]");

    // Hard failures leave no partial effect.
    assert_eq!(client.read_served_counter().await.expect("counter"), 0);
    assert_eq!(
        client
            .read_resource_level(Some("water"))
            .await
            .expect("water"),
        100
    );

    drop(client);
    machine.shutdown().await.expect("shutdown");
}
