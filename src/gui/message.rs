use crate::nav::{Command, CopiedField};

#[derive(Debug, Clone)]
pub enum Message {
    Command(Command),
    /// Copy a contact field; the value is looked up when handled.
    Copy(CopiedField),
}
