use crate::domain::notification::{Notification, Severity};
use crate::domain::ports::Notifier;
use async_trait::async_trait;
use std::io::{self, Write};

/// Presents notifications on the terminal.
///
/// Informational notifications go to stdout, destructive ones to stderr.
#[derive(Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => {
                println!("{}\n{}", notification.title, notification.description)
            }
            Severity::Destructive => {
                eprintln!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

/// Renders the payment-step instructions to any `Write` sink.
///
/// Shown once the entered details pass validation, so the user knows which
/// card to transfer to before confirming.
pub struct PaymentInstructions<W: Write> {
    writer: W,
}

impl<W: Write> PaymentInstructions<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn render(&mut self, card: &str, nickname: &str, amount: &str) -> io::Result<()> {
        writeln!(self.writer, "Transfer the funds to card: {card}")?;
        writeln!(self.writer, "Nickname: {nickname}")?;
        writeln!(self.writer, "Amount due: {amount} donation rubles")?;
        writeln!(
            self.writer,
            "After the transfer, confirm the payment and the details will be sent to the administrator."
        )?;
        Ok(())
    }
}
