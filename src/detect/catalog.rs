//! The marker catalog: which files count as evidence for which category.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// A detectable category: language ecosystem, UI framework or deploy target.
///
/// Declaration order is catalog order, which is also the order `signals`
/// serializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Node,
    Python,
    Rust,
    Go,
    Docker,
    Next,
    Vue,
    Vercel,
    Netlify,
    Heroku,
    Railway,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 11] = [
        Category::Node,
        Category::Python,
        Category::Rust,
        Category::Go,
        Category::Docker,
        Category::Next,
        Category::Vue,
        Category::Vercel,
        Category::Netlify,
        Category::Heroku,
        Category::Railway,
    ];

    /// Identifier used in reports (e.g. "node").
    pub fn id(self) -> &'static str {
        match self {
            Category::Node => "node",
            Category::Python => "python",
            Category::Rust => "rust",
            Category::Go => "go",
            Category::Docker => "docker",
            Category::Next => "next",
            Category::Vue => "vue",
            Category::Vercel => "vercel",
            Category::Netlify => "netlify",
            Category::Heroku => "heroku",
            Category::Railway => "railway",
        }
    }

    /// Marker files for this category, in the order they are checked.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Category::Node => &["package.json", "pnpm-lock.yaml", "yarn.lock"],
            Category::Python => &["requirements.txt", "pyproject.toml", "tox.ini"],
            Category::Rust => &["Cargo.toml"],
            Category::Go => &["go.mod"],
            Category::Docker => &["Dockerfile", "docker-compose.yml"],
            Category::Next => &["next.config.js", "next.config.mjs"],
            Category::Vue => &["vue.config.js", "vite.config.ts", "vite.config.js"],
            Category::Vercel => &["vercel.json"],
            Category::Netlify => &["netlify.toml"],
            Category::Heroku => &["Procfile"],
            Category::Railway => &["railway.json", "railway.toml"],
        }
    }

    /// Marker files of this category present directly under `root`.
    ///
    /// Non-recursive. A missing or unreadable root yields nothing.
    pub fn find_markers(self, root: &Path) -> Vec<String> {
        self.markers()
            .iter()
            .filter(|m| root.join(m).exists())
            .map(|m| m.to_string())
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Marker files found per category.
///
/// Always holds one entry for every catalog category, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Signals(BTreeMap<Category, Vec<String>>);

impl Signals {
    /// Signals with no evidence for any category.
    pub fn empty() -> Self {
        Self(Category::ALL.iter().map(|c| (*c, Vec::new())).collect())
    }

    /// Check every catalog marker under `root`.
    pub fn collect(root: &Path) -> Self {
        let mut signals = Self::empty();
        for category in Category::ALL {
            let found = category.find_markers(root);
            if !found.is_empty() {
                tracing::debug!(%category, files = ?found, "Markers found");
            }
            signals.0.insert(category, found);
        }
        signals
    }

    /// Build signals from a partial map, filling missing categories with empty lists.
    pub fn from_found(found: BTreeMap<Category, Vec<String>>) -> Self {
        let mut signals = Self::empty();
        signals.0.extend(found);
        signals
    }

    /// Files found for `category`.
    pub fn get(&self, category: Category) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether at least one marker of `category` was found.
    pub fn has(&self, category: Category) -> bool {
        !self.get(category).is_empty()
    }

    /// Iterate over all categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.0.iter().map(|(c, files)| (*c, files.as_slice()))
    }
}

impl Default for Signals {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'de> Deserialize<'de> for Signals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let found = BTreeMap::<Category, Vec<String>>::deserialize(deserializer)?;
        Ok(Self::from_found(found))
    }
}
