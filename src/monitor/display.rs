use std::io::Write;
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use super::types::AlertSink;

/// Prints each alert on its own line followed by a blinking `* ` / ` *` indicator.
/// Blocks for `blink_cycles * 2 * blink_interval` per alert.
pub struct ConsoleDisplay<W: Write = std::io::Stdout> {
    out: Mutex<W>,
    blink_cycles: u32,
    blink_interval: Duration,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            blink_cycles: 6,
            blink_interval: Duration::from_secs(1),
        }
    }

    pub fn blink(mut self, cycles: u32, interval: Duration) -> Self {
        self.blink_cycles = cycles;
        self.blink_interval = interval;
        self
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_alert(&self, out: &mut W, message: &str) -> std::io::Result<()> {
        writeln!(out, "{message}")?;
        for _ in 0..self.blink_cycles {
            write!(out, "\r* ")?;
            out.flush()?;
            std::thread::sleep(self.blink_interval);
            write!(out, "\r *")?;
            out.flush()?;
            std::thread::sleep(self.blink_interval);
        }
        out.flush()
    }
}

impl<W: Write> AlertSink for ConsoleDisplay<W> {
    fn display_alert(&self, message: &str) {
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!("Console display lock poisoned, alert dropped");
            return;
        };
        if let Err(e) = self.write_alert(&mut out, message) {
            tracing::warn!(error = %e, "Failed to write alert to console");
        }
    }
}

/// Keeps every alert in memory, in call order.
pub struct CollectingDisplay {
    messages: RwLock<Vec<String>>,
}

impl CollectingDisplay {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        match self.messages.read() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.messages.read() {
            Ok(messages) => messages.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return everything collected so far.
    pub fn drain(&self) -> Vec<String> {
        match self.messages.write() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for CollectingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for CollectingDisplay {
    fn display_alert(&self, message: &str) {
        match self.messages.write() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => {
                tracing::warn!("Collecting display lock poisoned, recovering");
                poisoned.into_inner().push(message.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_writes_message_line() {
        let display = ConsoleDisplay::with_writer(Vec::new()).blink(0, Duration::ZERO);
        display.display_alert("Hypothermia");
        display.display_alert("Tachycardia");
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out, "Hypothermia\nTachycardia\n");
    }

    #[test]
    fn console_blinks_indicator() {
        let display = ConsoleDisplay::with_writer(Vec::new()).blink(2, Duration::ZERO);
        display.display_alert("Hypertension");
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out, "Hypertension\n\r* \r *\r* \r *");
    }

    #[test]
    fn collecting_keeps_call_order() {
        let display = CollectingDisplay::new();
        assert!(display.is_empty());
        display.display_alert("first");
        display.display_alert("second");
        assert_eq!(display.len(), 2);
        assert_eq!(display.messages(), vec!["first", "second"]);
    }

    #[test]
    fn drain_empties_the_collector() {
        let display = CollectingDisplay::new();
        display.display_alert("only");
        assert_eq!(display.drain(), vec!["only"]);
        assert!(display.is_empty());
    }

    #[test]
    fn poisoned_collector_still_reports_its_messages() {
        let display = std::sync::Arc::new(CollectingDisplay::new());
        display.display_alert("before");
        let writer = std::sync::Arc::clone(&display);
        let result = std::thread::spawn(move || {
            let _guard = writer.messages.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(display.messages.is_poisoned());

        assert_eq!(display.len(), 1);
        assert!(!display.is_empty());
        display.display_alert("after");
        assert_eq!(display.len(), 2);
        assert_eq!(display.messages(), vec!["before", "after"]);
        assert_eq!(display.drain().len(), 2);
        assert_eq!(display.len(), 0);
    }

    #[test]
    fn sink_works_through_references_and_boxes() {
        let display = CollectingDisplay::new();
        let by_ref: &dyn AlertSink = &display;
        by_ref.display_alert("via ref");
        let boxed: Box<&CollectingDisplay> = Box::new(&display);
        boxed.display_alert("via box");
        assert_eq!(display.messages(), vec!["via ref", "via box"]);
    }
}
