//! Clubsite Content
//!
//! Everything a page needs besides theming and motion:
//!
//! - **Data**: serde models for events, projects, team and contact info,
//!   loaded concurrently from a directory of JSON files
//! - **Routes**: path resolution, navigation links and breadcrumbs
//! - **SEO**: page titles, keywords, Open Graph/Twitter tags and JSON-LD
//! - **Page plans**: the scroll-revealed regions of each page
//!
//! # Example
//!
//! ```rust
//! use clubsite_content::{Route, SeoMeta, SiteIdentity};
//!
//! let route = Route::from_path("/events/");
//! let meta = SeoMeta::for_route(route, &SiteIdentity::default());
//! assert_eq!(meta.title, "Workshops, Hackathons & Coding Events | AITM Coding Club");
//! ```

pub mod data;
mod error;
pub mod page;
pub mod routes;
pub mod seo;

pub use data::{
    ContactInfo, DataKind, DataSource, DomainLead, EntryId, Event, ExecutiveMember, Project,
    SiteData, TeamData,
};
pub use error::{ContentError, Result};
pub use page::{PagePlan, PlannedReveal};
pub use routes::{Breadcrumb, NavLink, PageMeta, Route, NAV_LINKS};
pub use seo::{SeoMeta, SiteIdentity};
