//! Single-consumer event loop that owns the registry.
//!
//! The host may post events from anywhere through a cloneable [`ServiceHandle`], but
//! exactly one task drains the queue and each event runs to completion before the
//! next is taken. That serialization is the only lock the registry slot needs.
use log::{debug, trace};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::commands::CommandRouter;
use crate::hooks;
use crate::host::{Actor, ChatDecision, HostEvent, Outbound, ServiceClosed};
use crate::logutil::preview;
use crate::registry::{DynamicProperties, RegistryStore};

pub struct RegistryService<P: DynamicProperties, O: Outbound> {
    store: RegistryStore<P>,
    router: CommandRouter,
    outbound: O,
}

impl<P: DynamicProperties, O: Outbound> RegistryService<P, O> {
    pub fn new(store: RegistryStore<P>, router: CommandRouter, outbound: O) -> Self {
        Self {
            store,
            router,
            outbound,
        }
    }

    pub fn store(&self) -> &RegistryStore<P> {
        &self.store
    }

    pub fn outbound(&self) -> &O {
        &self.outbound
    }

    /// Route one chat line. Non-player senders and ordinary chat pass through.
    pub fn handle_chat(&mut self, sender: &Actor, message: &str) -> ChatDecision {
        let Some(player) = sender.as_player() else {
            trace!("Ignoring chat from non-player {:?}", sender);
            return ChatDecision::Deliver;
        };
        let Some(response) = self.router.route(&mut self.store, message) else {
            return ChatDecision::Deliver;
        };
        debug!(
            "Command from {}: '{}'",
            preview(&player.name),
            preview(message)
        );
        if let Some(text) = response.console.as_deref() {
            self.outbound.console(text);
        }
        self.outbound.send_direct(player, &response.reply);
        ChatDecision::Cancel
    }

    pub fn handle_spawn(&mut self, actor: &Actor, initial_spawn: bool) {
        if let Some(greeting) = hooks::on_player_spawn(&mut self.store, actor, initial_spawn) {
            self.outbound.send_direct(&greeting.player, &greeting.text);
        }
    }

    pub fn handle_startup(&mut self, players: &[Actor]) {
        for greeting in hooks::startup_sweep(&mut self.store, players) {
            self.outbound.send_direct(&greeting.player, &greeting.text);
        }
    }

    /// Process one event. Returns `false` once the loop should stop.
    pub fn handle_event(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::ChatSend {
                sender,
                message,
                decision,
            } => {
                let outcome = self.handle_chat(&sender, &message);
                let _ = decision.send(outcome);
            }
            HostEvent::PlayerSpawn {
                actor,
                initial_spawn,
            } => self.handle_spawn(&actor, initial_spawn),
            HostEvent::Startup { players } => self.handle_startup(&players),
            HostEvent::Shutdown(done) => {
                let _ = done.send(());
                return false;
            }
        }
        true
    }

    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<HostEvent>) {
        while let Some(event) = rx.recv().await {
            if !self.handle_event(event) {
                break;
            }
        }
        debug!("registry service loop terminated");
    }
}

#[derive(Clone, Debug)]
pub struct ServiceHandle {
    tx: mpsc::UnboundedSender<HostEvent>,
}

impl ServiceHandle {
    /// Offer a chat line before delivery and wait for the verdict.
    pub async fn chat(
        &self,
        sender: Actor,
        message: impl Into<String>,
    ) -> Result<ChatDecision, ServiceClosed> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(HostEvent::ChatSend {
                sender,
                message: message.into(),
                decision: tx,
            })
            .map_err(|_| ServiceClosed)?;
        rx.await.map_err(|_| ServiceClosed)
    }

    pub fn spawn(&self, actor: Actor, initial_spawn: bool) -> Result<(), ServiceClosed> {
        self.tx
            .send(HostEvent::PlayerSpawn {
                actor,
                initial_spawn,
            })
            .map_err(|_| ServiceClosed)
    }

    pub fn startup(&self, players: Vec<Actor>) -> Result<(), ServiceClosed> {
        self.tx
            .send(HostEvent::Startup { players })
            .map_err(|_| ServiceClosed)
    }

    /// Stop the loop after every event queued so far has been handled.
    pub async fn shutdown(&self) {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(HostEvent::Shutdown(tx));
        let _ = rx.await;
    }
}

pub fn start_service<P, O>(service: RegistryService<P, O>) -> (ServiceHandle, JoinHandle<()>)
where
    P: DynamicProperties + Send + 'static,
    O: Outbound + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<HostEvent>();
    let join = tokio::spawn(service.run(rx));
    (ServiceHandle { tx }, join)
}
