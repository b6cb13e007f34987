//! tursa-web: Web server for the TURSA portfolio site.
//! Serves:
//!   - Portfolio (home) page with the featured project, project grid and detail overlay
//!   - About page
//!   - Contact page whose submissions are forwarded to an external form intake
//!   - Static assets under `<base>/assets`

pub mod contact;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
