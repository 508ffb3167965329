//! A tree of integer keys driven by [`Command`]s. Every command is applied to the tree in one
//! go; the descent path that goes with it is read off the tree beforehand so a visualizer can
//! replay it with [`Outcome::pacing`] delays.
//!
//! ```
//! use bst::session::{Outcome, Session};
//!
//! let mut session = Session::new();
//! session.execute("insert 5 3 8").unwrap();
//!
//! match session.execute("find 8").unwrap() {
//!     Outcome::Found { found, path, .. } => {
//!         assert!(found);
//!         assert_eq!(path, [5, 8]);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//!
//! assert!(session.execute("insert 5").is_err());
//! ```

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::command::Command;
use crate::config::{Config, Step};
use crate::error::{Error, Result};
use crate::traversal::Order;
use crate::tree::Tree;

/// What a successfully applied [`Command`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A single key went in. `path` holds the keys passed on the way to its parent.
    Inserted {
        /// The new key.
        key: i64,
        /// The keys visited before the new node was linked in.
        path: Vec<i64>,
    },
    /// A batch was inserted in order.
    Batch {
        /// Keys that went in.
        inserted: Vec<i64>,
        /// Keys that were already present, including repeats within the batch.
        rejected: Vec<i64>,
    },
    /// A key was removed.
    Deleted {
        /// The removed key.
        key: i64,
        /// The keys visited down to and including the removed one.
        path: Vec<i64>,
    },
    /// A lookup ran. Misses are outcomes too, since their path still gets shown.
    Found {
        /// The key looked for.
        key: i64,
        /// Whether it was there.
        found: bool,
        /// The keys visited.
        path: Vec<i64>,
    },
    /// Every key, in the requested order.
    Traversal {
        /// The order used.
        order: Order,
        /// The keys.
        keys: Vec<i64>,
    },
    /// The tree was emptied.
    Cleared {
        /// How many keys were dropped.
        removed: usize,
    },
}

impl Outcome {
    /// The pause before highlighting each step of this outcome's path, followed by a settle
    /// pause for a fresh insert. Outcomes that don't animate a descent have no delays.
    pub fn pacing(&self, config: &Config) -> Vec<Duration> {
        match self {
            Outcome::Inserted { path, .. } => {
                let mut delays = vec![config.delay(Step::InsertStep); path.len()];
                delays.push(config.delay(Step::InsertSettle));
                delays
            }
            Outcome::Found { path, .. } => vec![config.delay(Step::FindStep); path.len()],
            _ => Vec::new(),
        }
    }
}

impl Error {
    /// The pause before highlighting each step of a rejected insert's path, so the descent to the
    /// existing key can be shown before the error is. Other errors have no delays.
    pub fn pacing(&self, config: &Config) -> Vec<Duration> {
        match self {
            Error::DuplicateKey { path, .. } => vec![config.delay(Step::InsertStep); path.len()],
            _ => Vec::new(),
        }
    }
}

/// One user's tree plus the pacing they've picked.
#[derive(Debug, Default)]
pub struct Session {
    tree: Tree<i64>,
    config: Config,
}

impl Session {
    /// An empty tree at normal speed.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty tree with the given pacing.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: Tree::new(),
            config,
        })
    }

    /// Read-only access to the tree, e.g. for layout.
    pub fn tree(&self) -> &Tree<i64> {
        &self.tree
    }

    /// The current pacing.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Changes the animation speed. The tree is untouched.
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        self.config = Config::with_speed(speed)?;
        debug!(speed, "speed changed");
        Ok(())
    }

    /// Parses a line of user input and applies it.
    pub fn execute(&mut self, input: &str) -> Result<Outcome> {
        let command = input.parse::<Command>().map_err(|e| {
            warn!(input, error = %e, "rejected input");
            e
        })?;
        self.apply(command)
    }

    /// Applies a command to the tree.
    #[instrument(level = "debug", skip(self), fields(len = self.tree.len()))]
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Insert(keys) if keys.len() == 1 => self.insert(keys[0]),
            Command::Insert(keys) => Ok(self.insert_batch(keys)),
            Command::Delete(key) => self.delete(key),
            Command::Find(key) => Ok(self.find(key)),
            Command::Traverse(order) => {
                let keys: Vec<i64> = self.tree.traverse(order).into_iter().copied().collect();
                debug!(%order, count = keys.len(), "traversed");
                Ok(Outcome::Traversal { order, keys })
            }
            Command::Clear => {
                let removed = self.tree.len();
                self.tree.clear();
                info!(removed, "tree cleared");
                Ok(Outcome::Cleared { removed })
            }
        }
    }

    fn insert(&mut self, key: i64) -> Result<Outcome> {
        let path = self.path_to(key);
        if !self.tree.insert(key) {
            warn!(key, "duplicate key rejected");
            return Err(Error::DuplicateKey { key, path });
        }
        debug!(key, depth = path.len(), "inserted");
        Ok(Outcome::Inserted { key, path })
    }

    fn insert_batch(&mut self, keys: Vec<i64>) -> Outcome {
        let (inserted, rejected): (Vec<i64>, Vec<i64>) =
            keys.into_iter().partition(|key| self.tree.insert(*key));
        if !rejected.is_empty() {
            warn!(?rejected, "duplicate keys skipped in batch");
        }
        debug!(inserted = inserted.len(), "batch inserted");
        Outcome::Batch { inserted, rejected }
    }

    fn delete(&mut self, key: i64) -> Result<Outcome> {
        let path = self.path_to(key);
        if !self.tree.delete(&key) {
            warn!(key, "delete of missing key");
            return Err(Error::NotFound(key));
        }
        debug!(key, "deleted");
        Ok(Outcome::Deleted { key, path })
    }

    fn find(&self, key: i64) -> Outcome {
        let search = self.tree.search(&key);
        debug!(key, found = search.found, depth = search.depth(), "searched");
        Outcome::Found {
            key,
            found: search.found,
            path: search.path.into_iter().copied().collect(),
        }
    }

    fn path_to(&self, key: i64) -> Vec<i64> {
        self.tree.descend(&key).copied().collect()
    }
}
