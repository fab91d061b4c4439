use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Orbit, Rocket};
use tokio::sync::watch;

/// A fairing that publishes the port Rocket actually bound, and the handle
/// that waits for it. Needed when the configured port is 0.
pub fn create_pair() -> (PortSaver, Port) {
    let (tx, rx) = watch::channel(None);
    (PortSaver { sender: tx }, Port { receiver: rx })
}

pub struct Port {
    receiver: watch::Receiver<Option<u16>>,
}

impl Port {
    /// Resolves once the server has lifted off. `None` if it never will.
    pub async fn get(&mut self) -> Option<u16> {
        self.receiver
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|port| *port)
    }
}

pub struct PortSaver {
    sender: watch::Sender<Option<u16>>,
}

#[rocket::async_trait]
impl Fairing for PortSaver {
    fn info(&self) -> Info {
        Info {
            name: "Port Saver",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let port = rocket.config().port;
        tracing::info!(port, "Listening for contact form submissions");
        self.sender.send_replace(Some(port));
    }
}
