mod common;

use common::{memory_store, names};
use playerdb::commands::router::{MSG_CLEARED, MSG_DEL_NOT_FOUND, MSG_EMPTY_LIST, MSG_JSON_SENT, MSG_UNKNOWN};
use playerdb::commands::{CommandParser, CommandRouter};

#[test]
fn set_get_del_sequence() {
    let router = CommandRouter::default();
    let mut store = memory_store();

    let r = router.route(&mut store, "+set Alice").expect("command");
    assert_eq!(store.list(), names(&["Alice"]));
    assert!(r.reply.contains("Alice") && r.reply.contains("Added"), "{}", r.reply);

    let r = router.route(&mut store, "+set Alice").expect("command");
    assert_eq!(store.list(), names(&["Alice"]));
    assert!(r.reply.contains("already"), "{}", r.reply);

    let r = router.route(&mut store, "+get Bob").expect("command");
    assert!(r.reply.contains("not found"), "{}", r.reply);
    assert_eq!(store.list(), names(&["Alice"]));

    let r = router.route(&mut store, "+get Alice").expect("command");
    assert_eq!(r.reply, "Found player Alice");

    let r = router.route(&mut store, "+del Alice").expect("command");
    assert!(r.reply.contains("Deleted"), "{}", r.reply);
    assert!(store.list().is_empty());

    let r = router.route(&mut store, "+del Alice").expect("command");
    assert_eq!(r.reply, MSG_DEL_NOT_FOUND);
}

#[test]
fn list_empty_then_populated() {
    let router = CommandRouter::default();
    let mut store = memory_store();

    let r = router.route(&mut store, "+list").unwrap();
    assert_eq!(r.reply, MSG_EMPTY_LIST);
    assert!(!r.reply.is_empty());

    store.add("Alice");
    store.add("Bob");
    let r = router.route(&mut store, "+LIST").unwrap();
    assert_eq!(r.reply, "All players: Alice, Bob");
}

#[test]
fn unknown_verb_replies_and_leaves_registry() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    store.add("Alice");
    let r = router.route(&mut store, "+bogus").unwrap();
    assert_eq!(r.reply, MSG_UNKNOWN);
    assert!(r.console.is_none());
    assert_eq!(store.list(), names(&["Alice"]));
}

#[test]
fn space_after_trigger_is_not_a_verb() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    store.add("Alice");
    for line in ["+ clear", "+ set Bob", "+  del Alice"] {
        let r = router.route(&mut store, line).expect("command");
        assert_eq!(r.reply, MSG_UNKNOWN, "{line}");
    }
    assert_eq!(store.list(), names(&["Alice"]));
}

#[test]
fn ordinary_chat_is_not_routed() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    assert!(router.route(&mut store, "hello everyone").is_none());
    assert!(router.route(&mut store, "set Alice").is_none());
    assert!(store.list().is_empty());
}

#[test]
fn verbs_are_case_insensitive_names_are_not() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    router.route(&mut store, "+SeT Alice").unwrap();
    assert_eq!(store.list(), names(&["Alice"]));
    let r = router.route(&mut store, "+GET alice").unwrap();
    assert!(r.reply.contains("not found"));
}

#[test]
fn missing_name_does_not_mutate() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    store.add("Alice");
    for line in ["+set", "+get", "+del", "+set   "] {
        let r = router.route(&mut store, line).unwrap();
        assert!(r.reply.starts_with("Usage: +"), "{line}: {}", r.reply);
    }
    assert_eq!(store.list(), names(&["Alice"]));
}

#[test]
fn extra_args_are_ignored() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    router.route(&mut store, "+set Alice Bob").unwrap();
    assert_eq!(store.list(), names(&["Alice"]));
}

#[test]
fn clear_confirms() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    store.add("Alice");
    let r = router.route(&mut store, "+clear").unwrap();
    assert_eq!(r.reply, MSG_CLEARED);
    assert!(store.list().is_empty());
}

#[test]
fn json_goes_to_console_not_reply() {
    let router = CommandRouter::default();
    let mut store = memory_store();
    store.add("Alice");
    let r = router.route(&mut store, "+json").unwrap();
    assert_eq!(r.reply, MSG_JSON_SENT);
    assert!(!r.reply.contains("Alice"));
    let console = r.console.expect("console output");
    assert!(console.contains("\"Alice\""), "{console}");
}

#[test]
fn help_lists_every_verb_with_configured_trigger() {
    let router = CommandRouter::new(CommandParser::new_with_prefix(Some("!".into())));
    let mut store = memory_store();
    assert!(router.route(&mut store, "+help").is_none());
    let r = router.route(&mut store, "!help").unwrap();
    for verb in ["set", "get", "del", "list", "clear", "json"] {
        assert!(r.reply.contains(&format!("!{verb}")), "missing {verb}: {}", r.reply);
    }
}
