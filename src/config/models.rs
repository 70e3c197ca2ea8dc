//! Run and Action descriptors.
//!
//! Each descriptor pairs a model CID with the objectives the dapp can
//! request against it. Objective order is the order offered in the UI.

use serde::Serialize;

/// A single objective entry of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Objective {
    /// Lookup key.
    pub key: &'static str,
    /// Objective CID.
    pub objective: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// A model CID with its objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub model: &'static str,
    pub objectives: &'static [Objective],
}

impl ModelDescriptor {
    /// Find an objective by key.
    pub fn objective(&self, key: &str) -> Option<&'static Objective> {
        self.objectives.iter().find(|o| o.key == key)
    }

    /// Iterate objective keys in declared order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.objectives.iter().map(|o| o.key)
    }
}

/// Weather sensor sampling runs.
pub const RUN: ModelDescriptor = ModelDescriptor {
    model: "QmPVr7k4N2jNiCYjbvQWPcmxzm5jwY3ZHEuJMgbQLmPKvY",
    objectives: &[
        Objective {
            key: "1h",
            objective: "QmPtwRTjPmvBweSmG4zVGtUc9KWxLsPp76xERvjUXFJWEz",
            label: "1h",
        },
        Objective {
            key: "24h",
            objective: "QmbYXWWhNtnjhhBTvs2UfHiFLTUsXSZsoLoKSufiZHPxvR",
            label: "24h",
        },
        Objective {
            key: "60s",
            objective: "QmYijVc27M27WyS1UiAB72GmeDBKVo2Nyvh1EYXUBZUNJb",
            label: "60s",
        },
    ],
};

/// Actuator control commands.
pub const ACTION: ModelDescriptor = ModelDescriptor {
    model: "QmNeMoBUiYjk4VzLtsBe9XAXfpyFawsUd9wEYTQy4tZpEj",
    objectives: &[
        Objective {
            key: "clockwise",
            objective: "QmRmj9VnRBbgmQwZMVU3oCinaYG8oh1UAvQJbtPUmEWSq1",
            label: "clockwise",
        },
        Objective {
            key: "counterclockwise",
            objective: "Qmd1YREP5MMLzoxT2kmvEocPxFMGFiCrLK6zQRmp5ebBqU",
            label: "counterclockwise",
        },
    ],
};
