//! Built-in install strategies.

mod cargo;
mod go;
mod node;
mod python;

pub use cargo::CargoStrategy;
pub use go::GoStrategy;
pub use node::NodeStrategy;
pub use python::PythonStrategy;

use crate::config::InstallerConfig;
use crate::install::InstallStrategy;

/// Returns all built-in strategies, in installation order.
pub fn all_strategies(config: &InstallerConfig) -> Vec<Box<dyn InstallStrategy>> {
    vec![
        Box::new(NodeStrategy),
        Box::new(PythonStrategy::new(
            config.python.as_str(),
            config.python_policy,
        )),
        Box::new(CargoStrategy),
        Box::new(GoStrategy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Ecosystem;

    #[test]
    fn test_strategies_follow_ecosystem_priority() {
        let order: Vec<Ecosystem> = all_strategies(&InstallerConfig::default())
            .iter()
            .map(|s| s.ecosystem())
            .collect();

        assert_eq!(order, Ecosystem::PRIORITY.to_vec());
    }
}
