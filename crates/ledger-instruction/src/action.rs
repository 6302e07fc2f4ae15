//! The three instruction actions.
//!
//! An instruction carries exactly one [`Action`]. The variant decides the
//! discriminator byte fed to the hasher and the label that darc rules are
//! matched against.

use crate::argument::Arguments;
use serde::{Deserialize, Serialize};

pub const SPAWN_DISCRIMINATOR: u8 = 0;
pub const INVOKE_DISCRIMINATOR: u8 = 1;
pub const DELETE_DISCRIMINATOR: u8 = 2;

/// Create a new object of the given contract type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    pub contract_id: String,
    pub args: Arguments,
}

impl Spawn {
    pub fn new(contract_id: impl Into<String>, args: Arguments) -> Self {
        Self {
            contract_id: contract_id.into(),
            args,
        }
    }
}

/// Mutate an existing object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Invoke {
    pub command: String,
    pub args: Arguments,
}

impl Invoke {
    pub fn new(command: impl Into<String>, args: Arguments) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Spawn(Spawn),
    Invoke(Invoke),
    Delete,
}

impl Action {
    pub fn spawn(contract_id: impl Into<String>, args: Arguments) -> Self {
        Self::Spawn(Spawn::new(contract_id, args))
    }

    pub fn invoke(command: impl Into<String>, args: Arguments) -> Self {
        Self::Invoke(Invoke::new(command, args))
    }

    /// Byte selecting the variant in the instruction digest.
    pub fn discriminator(&self) -> u8 {
        match self {
            Self::Spawn(_) => SPAWN_DISCRIMINATOR,
            Self::Invoke(_) => INVOKE_DISCRIMINATOR,
            Self::Delete => DELETE_DISCRIMINATOR,
        }
    }

    /// Label matched against darc rules: `Spawn_<contract>`,
    /// `Invoke_<command>` or `Delete`.
    pub fn label(&self) -> String {
        match self {
            Self::Spawn(s) => format!("Spawn_{}", s.contract_id),
            Self::Invoke(i) => format!("Invoke_{}", i.command),
            Self::Delete => "Delete".to_string(),
        }
    }

    /// Arguments carried by the action; empty for Delete.
    pub fn arguments(&self) -> &[crate::argument::Argument] {
        match self {
            Self::Spawn(s) => s.args.as_slice(),
            Self::Invoke(i) => i.args.as_slice(),
            Self::Delete => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Action::spawn("darc", Arguments::new()).label(), "Spawn_darc");
        assert_eq!(
            Action::invoke("update", Arguments::new()).label(),
            "Invoke_update"
        );
        assert_eq!(Action::Delete.label(), "Delete");
    }

    #[test]
    fn test_empty_names_keep_separator() {
        assert_eq!(Action::spawn("", Arguments::new()).label(), "Spawn_");
        assert_eq!(Action::invoke("", Arguments::new()).label(), "Invoke_");
    }

    #[test]
    fn test_discriminators() {
        assert_eq!(Action::spawn("coin", Arguments::new()).discriminator(), 0x00);
        assert_eq!(Action::invoke("mint", Arguments::new()).discriminator(), 0x01);
        assert_eq!(Action::Delete.discriminator(), 0x02);
    }

    #[test]
    fn test_delete_has_no_arguments() {
        assert!(Action::Delete.arguments().is_empty());
        let spawn = Action::spawn("coin", Arguments::new().with("coins", vec![1u8]));
        assert_eq!(spawn.arguments().len(), 1);
    }
}
