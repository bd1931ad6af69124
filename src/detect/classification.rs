//! The classification record produced by detection.

use crate::detect::catalog::{Category, Signals};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language ecosystem that can have dependencies installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Node,
    Python,
    Rust,
    Go,
}

impl Ecosystem {
    /// Fixed order used for `types` and for installation.
    pub const PRIORITY: [Ecosystem; 4] = [
        Ecosystem::Node,
        Ecosystem::Python,
        Ecosystem::Rust,
        Ecosystem::Go,
    ];

    pub fn category(self) -> Category {
        match self {
            Ecosystem::Node => Category::Node,
            Ecosystem::Python => Category::Python,
            Ecosystem::Rust => Category::Rust,
            Ecosystem::Go => Category::Go,
        }
    }
}

/// UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Next,
    Vue,
}

impl Framework {
    /// First match wins.
    pub const PRIORITY: [Framework; 2] = [Framework::Next, Framework::Vue];

    pub fn category(self) -> Category {
        match self {
            Framework::Next => Category::Next,
            Framework::Vue => Category::Vue,
        }
    }
}

/// Deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    Vercel,
    Netlify,
    Heroku,
    Railway,
    Docker,
}

impl DeployTarget {
    /// First match wins; docker is the fallback.
    pub const PRIORITY: [DeployTarget; 5] = [
        DeployTarget::Vercel,
        DeployTarget::Netlify,
        DeployTarget::Heroku,
        DeployTarget::Railway,
        DeployTarget::Docker,
    ];

    pub fn category(self) -> Category {
        match self {
            DeployTarget::Vercel => Category::Vercel,
            DeployTarget::Netlify => Category::Netlify,
            DeployTarget::Heroku => Category::Heroku,
            DeployTarget::Railway => Category::Railway,
            DeployTarget::Docker => Category::Docker,
        }
    }
}

macro_rules! display_as_category {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.category().id())
                }
            }
        )*
    };
}

display_as_category!(Ecosystem, Framework, DeployTarget);

/// Result of scanning a project root.
///
/// Built once per scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredClassification")]
pub struct Classification {
    types: Vec<Ecosystem>,
    framework: Option<Framework>,
    deploy: Option<DeployTarget>,
    signals: Signals,
}

impl Classification {
    /// Derive the classification from the markers found.
    pub fn from_signals(signals: Signals) -> Self {
        let types = Ecosystem::PRIORITY
            .into_iter()
            .filter(|e| signals.has(e.category()))
            .collect();

        let framework = Framework::PRIORITY
            .into_iter()
            .find(|f| signals.has(f.category()));

        let deploy = DeployTarget::PRIORITY
            .into_iter()
            .find(|d| signals.has(d.category()));

        Self {
            types,
            framework,
            deploy,
            signals,
        }
    }

    /// Detected ecosystems, in fixed priority order.
    pub fn types(&self) -> &[Ecosystem] {
        &self.types
    }

    pub fn framework(&self) -> Option<Framework> {
        self.framework
    }

    pub fn deploy(&self) -> Option<DeployTarget> {
        self.deploy
    }

    /// Raw evidence per category. Reporting only.
    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    /// Whether `ecosystem` was detected.
    pub fn has(&self, ecosystem: Ecosystem) -> bool {
        self.types.contains(&ecosystem)
    }

    /// True when nothing at all was detected.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.framework.is_none() && self.deploy.is_none()
    }
}

/// Classification as read from a report, before consistency checks.
#[derive(Deserialize)]
struct StoredClassification {
    types: Vec<Ecosystem>,
    framework: Option<Framework>,
    deploy: Option<DeployTarget>,
    signals: Signals,
}

impl TryFrom<StoredClassification> for Classification {
    type Error = String;

    /// Accept a stored record only if it is exactly what its signals derive to.
    fn try_from(stored: StoredClassification) -> Result<Self, Self::Error> {
        let derived = Classification::from_signals(stored.signals);

        if stored.types != derived.types {
            return Err(format!(
                "types {:?} do not match signals (expected {:?})",
                stored.types, derived.types
            ));
        }
        if stored.framework != derived.framework {
            return Err(format!(
                "framework {:?} does not match signals (expected {:?})",
                stored.framework, derived.framework
            ));
        }
        if stored.deploy != derived.deploy {
            return Err(format!(
                "deploy {:?} does not match signals (expected {:?})",
                stored.deploy, derived.deploy
            ));
        }

        Ok(derived)
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::from_signals(Signals::empty())
    }
}
