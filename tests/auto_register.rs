mod common;

use common::{memory_store, names, RecordingOutbound};
use playerdb::commands::CommandRouter;
use playerdb::hooks::{self, spawn_welcome, MSG_STARTUP_ADDED};
use playerdb::host::{Actor, RegistryService};

#[test]
fn initial_spawn_registers_and_welcomes_once() {
    let out = RecordingOutbound::default();
    let mut service = RegistryService::new(memory_store(), CommandRouter::default(), out.clone());

    service.handle_spawn(&Actor::player("Alice"), true);
    service.handle_spawn(&Actor::player("Alice"), false);
    service.handle_spawn(&Actor::player("Alice"), true);

    assert_eq!(service.store().list(), names(&["Alice"]));
    assert_eq!(out.direct_to("Alice"), vec![spawn_welcome("Alice")]);
}

#[test]
fn respawn_of_unknown_player_is_ignored() {
    let mut store = memory_store();
    assert!(hooks::on_player_spawn(&mut store, &Actor::player("Bob"), false).is_none());
    assert!(store.list().is_empty());
}

#[test]
fn entities_are_never_registered() {
    let mut store = memory_store();
    let zombie = Actor::Entity {
        type_id: "minecraft:zombie".into(),
    };
    assert!(hooks::on_player_spawn(&mut store, &zombie, true).is_none());
    assert!(hooks::startup_sweep(&mut store, &[zombie]).is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn known_player_gets_no_welcome() {
    let out = RecordingOutbound::default();
    let mut store = memory_store();
    store.add("Alice");
    let mut service = RegistryService::new(store, CommandRouter::default(), out.clone());
    service.handle_spawn(&Actor::player("Alice"), true);
    assert!(out.direct().is_empty());
}

#[test]
fn startup_sweep_adds_only_missing_players() {
    let out = RecordingOutbound::default();
    let mut store = memory_store();
    store.add("Alice");
    let mut service = RegistryService::new(store, CommandRouter::default(), out.clone());

    service.handle_startup(&[
        Actor::player("Alice"),
        Actor::player("Bob"),
        Actor::Entity {
            type_id: "armor_stand".into(),
        },
        Actor::player("Carol"),
    ]);

    assert_eq!(service.store().list(), names(&["Alice", "Bob", "Carol"]));
    assert!(out.direct_to("Alice").is_empty());
    assert_eq!(out.direct_to("Bob"), vec![MSG_STARTUP_ADDED.to_string()]);
    assert_eq!(out.direct_to("Carol"), vec![MSG_STARTUP_ADDED.to_string()]);
}
