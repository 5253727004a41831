use crate::user_input::interface::{InputEvent, UserInput};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Input driven by the test through [`UserInputFake::send`].
pub struct UserInputFake {
    sender: Sender<InputEvent>,
    receiver: Mutex<Option<Receiver<InputEvent>>>,
}

impl UserInputFake {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver: Mutex::new(Some(receiver)),
        }
    }

    pub fn send(&self, event: InputEvent) {
        let _ = self.sender.send(event);
    }
}

impl UserInput for UserInputFake {
    fn events(&self) -> Receiver<InputEvent> {
        match self.receiver.lock().ok().and_then(|mut r| r.take()) {
            Some(receiver) => receiver,
            None => channel().1,
        }
    }
}

impl Default for UserInputFake {
    fn default() -> Self {
        Self::new()
    }
}
