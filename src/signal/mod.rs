use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};

// Stop flag shared between the Ctrl-C handler thread and the main loop.
// The channel lets a sleeping loop wake as soon as the trigger fires
// instead of finishing the pause first.
pub struct Interrupt {
    raised: Arc<AtomicBool>,
    receiver: Receiver<()>,
}

#[derive(Clone)]
pub struct Trigger {
    raised: Arc<AtomicBool>,
    sender: Sender<()>,
}

impl Trigger {
    pub fn fire(&self) {
        self.raised.store(true, Ordering::SeqCst);
        let _ = self.sender.try_send(());
    }
}

impl Interrupt {
    pub fn new() -> (Self, Trigger) {
        let raised = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = bounded(1);
        (
            Self {
                raised: raised.clone(),
                receiver,
            },
            Trigger { raised, sender },
        )
    }

    pub fn install() -> Result<Self, ctrlc::Error> {
        let (interrupt, trigger) = Self::new();
        ctrlc::set_handler(move || {
            log::info!("interrupt received, stopping after this iteration");
            trigger.fire();
        })?;
        Ok(interrupt)
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    // Returns true when the pause was cut short by the trigger.
    pub fn sleep(&self, timeout: Duration) -> bool {
        if self.is_raised() {
            return true;
        }
        self.receiver.recv_timeout(timeout).is_ok()
    }
}
