use serde::{Deserialize, Serialize};

/// Lifecycle of a tree: `Fine -> OnFire -> BurnedOut`, never backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Unburned and flammable
    Fine,
    /// Burning; spreads to fine neighbours on its next step
    OnFire,
    /// Terminal, inert
    BurnedOut,
}

impl Condition {
    /// Position in the lifecycle. Never decreases for a given tree.
    pub fn rank(self) -> u8 {
        match self {
            Condition::Fine => 0,
            Condition::OnFire => 1,
            Condition::BurnedOut => 2,
        }
    }

    pub fn is_burning(self) -> bool {
        self == Condition::OnFire
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Condition::Fine => "Fine",
            Condition::OnFire => "On Fire",
            Condition::BurnedOut => "Burned Out",
        };
        f.write_str(label)
    }
}
