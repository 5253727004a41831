use crate::library::logger::interface::Logger;
use crate::user_input::interface::{InputEvent, UserInput};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub const HELP: &str = "commands: pick <image> [more images...] | submit | reload | quit";

/// Reads one command per line from stdin.
pub struct UserInputConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl UserInputConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("input").with_namespace("console"),
        }
    }
}

impl UserInput for UserInputConsole {
    fn events(&self) -> Receiver<InputEvent> {
        let (tx, rx) = channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            println!("{}", HELP);
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        let _ = logger.error(&format!("stdin: {}", e));
                        break;
                    }
                };
                match parse_line(&line) {
                    Some(event) => {
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => println!("{}", HELP),
                }
            }
            let _ = tx.send(InputEvent::Quit);
        });

        rx
    }
}

pub fn parse_line(line: &str) -> Option<InputEvent> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "pick" | "p" => Some(InputEvent::FilesPicked(words.map(PathBuf::from).collect())),
        "submit" | "s" => Some(InputEvent::Submit),
        "reload" | "r" => Some(InputEvent::ReloadLabels),
        "quit" | "q" | "exit" => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pick_keeps_every_path() {
        assert_eq!(
            parse_line("pick a.jpg b.png"),
            Some(InputEvent::FilesPicked(vec![
                PathBuf::from("a.jpg"),
                PathBuf::from("b.png")
            ]))
        );
        assert_eq!(parse_line("pick"), Some(InputEvent::FilesPicked(vec![])));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("  submit "), Some(InputEvent::Submit));
        assert_eq!(parse_line("r"), Some(InputEvent::ReloadLabels));
        assert_eq!(parse_line("exit"), Some(InputEvent::Quit));
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert_eq!(parse_line("predict now"), None);
        assert_eq!(parse_line("   "), None);
    }
}
