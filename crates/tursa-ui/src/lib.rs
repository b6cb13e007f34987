//! tursa-ui: Interactive controllers for the TURSA site.
//!
//! Each controller owns its state exclusively and is mutated only through
//! discrete events:
//!   - `route`: path to page resolution under the deployment base path
//!   - `shell`: nav chrome and the mobile menu toggle
//!   - `disclosure`: the single open project overlay
//!   - `contact`: contact form fields and submission lifecycle
//!
//! Nothing here does I/O; the web crate renders the state and performs the
//! network call the contact controller asks for.

pub mod route;
pub mod shell;
pub mod disclosure;
pub mod contact;

pub use route::{BasePath, Resolution, Route};
pub use shell::{NavLink, Shell};
pub use disclosure::{ClickTarget, Disclosure, Focus, DISMISS_KEY};
pub use contact::{ContactFields, ContactForm, Field, FormError, FormStatus, Submission, Ticket};
