//! Theme-aware icon fill for server-rendered pages.
//!
//! Icons tagged with `ph-fill-if-dark` or `ph-fill-if-light` switch between
//! their outline (`ph`) and filled (`ph-fill`) glyph depending on the user's
//! color-scheme preference. The crate is compiled to WebAssembly and runs in
//! the browser, re-applying the classes whenever the preference changes or
//! htmx swaps new markup into the page.
//!
//! The core is host-independent: [`sync::synchronize`] works against any
//! [`host::IconHost`], so the policy is tested natively against
//! [`memory::MemoryDocument`]. Browser glue lives behind the `hydrate`
//! feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sync`] | The synchronization pass over a document |
//! | [`marker`] | Membership/glyph types and the fill policy |
//! | [`config`] | Class names and event identifiers, loadable from JSON |
//! | [`host`] | Document access trait |
//! | [`memory`] | In-memory document for tests and non-browser hosts |
//! | [`theme`] | Color-scheme preference query |
//! | [`consts`] | Default class names and event identifiers |
//! | `dom` | `web-sys` document host (`hydrate` only) |
//! | `listen` | Theme-change and swap listeners (`hydrate` only) |
//! | `bindings` | JS entry points (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod host;
pub mod marker;
pub mod memory;
pub mod sync;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod bindings;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod listen;

pub use config::{ConfigError, FillConfig};
pub use host::IconHost;
pub use marker::{Glyph, Membership};
pub use sync::synchronize;
pub use theme::detect_dark_preference;
