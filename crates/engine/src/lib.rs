//! Tree engine for stepmap
//!
//! This crate turns the flat test list into its familized tree and edits it:
//! - familize: Pure trie builder, flat list -> shared-prefix tree
//! - tree: Read-only view model handed to the presentation layer
//! - editor: Mutation engine; every change rebuilds the tree from scratch
//! - draft: Commit-once dialogue protocol on top of the editor
//! - config: `stepmap.toml` defaults and policies
//!
//! The flat list is the only source of truth. The tree is never patched; it
//! is discarded and rebuilt after every committed change.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod draft;
pub mod editor;
pub mod familize;
pub mod tree;

pub use config::{BranchPolicy, DefaultStep, EditorConfig, CONFIG_FILE_NAME, DEFAULT_TITLE};
pub use draft::{Draft, DraftKind};
pub use editor::{AddMode, DeleteMode, Editor};
pub use familize::familize;
pub use tree::{Level, Node, Nodes, Terminal, Tree};
