//! Routing module
//!
//! Provides the ordered route table and the first-match-wins path matcher:
//! - Global catch-all (`*`)
//! - Embedded wildcard patterns (`/users/*`)
//! - Exact path matching

mod matcher;
mod table;

pub use matcher::PathMatcher;
pub use table::{RouteDescriptor, RouteError, RouteTable};
