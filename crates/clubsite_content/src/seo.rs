//! Search and social metadata for page heads

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::routes::Route;

/// Organization postal address for structured data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            street: "AITM Campus, Anjumanabad".to_string(),
            locality: "Bhatkal".to_string(),
            region: "Karnataka".to_string(),
            postal_code: "581320".to_string(),
            country: "IN".to_string(),
        }
    }
}

/// Who the site belongs to and how it presents itself
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteIdentity {
    pub name: String,
    pub base_url: String,
    pub default_title: String,
    pub default_description: String,
    /// Keywords included on every page
    pub keywords: Vec<String>,
    /// Paths relative to `base_url`
    pub logo: String,
    pub og_image: String,
    pub twitter_image: String,
    pub email: Option<String>,
    pub address: PostalAddress,
    /// Social profile URLs
    pub same_as: Vec<String>,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "AITM Coding Club".to_string(),
            base_url: "https://aitmcodingclub.example.com".to_string(),
            default_title: "AITM Coding Club | Code • Collaborate • Create".to_string(),
            default_description: "Join AITM Coding Club to enhance your programming skills through workshops, hackathons, and real-world projects. Foster innovation and problem-solving through technology.".to_string(),
            keywords: vec![
                "aitm coding club".to_string(),
                "coding club aitm".to_string(),
                "coding club bhatkal".to_string(),
                "engineering college coding club".to_string(),
            ],
            logo: "/logo.png".to_string(),
            og_image: "/og-image.jpg".to_string(),
            twitter_image: "/twitter-image.jpg".to_string(),
            email: Some("aitmcodingclub@example.com".to_string()),
            address: PostalAddress::default(),
            same_as: vec![
                "https://github.com/AITM-Coding-Club".to_string(),
                "https://linkedin.com/company/aitm-coding-club".to_string(),
                "https://instagram.com/aitm_coding_club".to_string(),
            ],
        }
    }
}

impl SiteIdentity {
    /// Absolute URL for a site path
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    fn organization_schema(&self) -> Value {
        let mut schema = json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": self.name,
            "url": self.url(""),
            "logo": self.url(&self.logo),
            "description": self.default_description,
            "address": {
                "@type": "PostalAddress",
                "addressLocality": self.address.locality,
                "addressRegion": self.address.region,
                "postalCode": self.address.postal_code,
                "streetAddress": self.address.street,
                "addressCountry": self.address.country,
            },
            "sameAs": self.same_as,
        });
        if let Some(email) = &self.email {
            schema["email"] = json!(email);
        }
        schema
    }
}

/// Resolved head metadata for one page
#[derive(Clone, Debug, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub og_image: String,
    pub twitter_image: String,
    /// JSON-LD documents, organization first
    pub schemas: Vec<Value>,
}

impl SeoMeta {
    pub fn for_route(route: Route, identity: &SiteIdentity) -> Self {
        Self::build(route, route.path(), identity)
    }

    /// Like [`SeoMeta::for_route`], but the canonical URL keeps the requested
    /// path so unknown pages point at themselves.
    pub fn for_path(path: &str, identity: &SiteIdentity) -> Self {
        let route = Route::from_path(path);
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::build(route, path, identity)
    }

    fn build(route: Route, path: &str, identity: &SiteIdentity) -> Self {
        let meta = route.meta();

        let title = if meta.title.is_empty() {
            identity.default_title.clone()
        } else {
            format!("{} | {}", meta.title, identity.name)
        };
        let description = if meta.description.is_empty() {
            identity.default_description.clone()
        } else {
            meta.description.to_string()
        };

        let mut seen = HashSet::new();
        let keywords = identity
            .keywords
            .iter()
            .map(String::as_str)
            .chain(meta.keywords.iter().copied())
            .filter(|kw| seen.insert(kw.to_lowercase()))
            .map(str::to_string)
            .collect();

        let mut schemas = vec![identity.organization_schema()];
        let crumbs = route.breadcrumbs();
        if !crumbs.is_empty() {
            let items: Vec<Value> = crumbs
                .iter()
                .enumerate()
                .map(|(i, crumb)| {
                    json!({
                        "@type": "ListItem",
                        "position": i + 1,
                        "name": crumb.name,
                        "item": identity.url(crumb.path),
                    })
                })
                .collect();
            schemas.push(json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": items,
            }));
        }

        tracing::trace!(%route, %title, "resolved page metadata");

        Self {
            title,
            description,
            keywords,
            canonical_url: identity.url(path),
            og_image: identity.url(&identity.og_image),
            twitter_image: identity.url(&identity.twitter_image),
            schemas,
        }
    }

    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }

    /// Render as `<head>` children, one tag per line
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SeoMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = escape_html(&self.title);
        let description = escape_html(&self.description);
        let url = escape_html(&self.canonical_url);

        writeln!(f, "<title>{title}</title>")?;
        writeln!(f, r#"<meta name="description" content="{description}" />"#)?;
        writeln!(
            f,
            r#"<meta name="keywords" content="{}" />"#,
            escape_html(&self.keywords_joined())
        )?;
        writeln!(f, r#"<link rel="canonical" href="{url}" />"#)?;

        writeln!(f, r#"<meta property="og:type" content="website" />"#)?;
        writeln!(f, r#"<meta property="og:url" content="{url}" />"#)?;
        writeln!(f, r#"<meta property="og:title" content="{title}" />"#)?;
        writeln!(f, r#"<meta property="og:description" content="{description}" />"#)?;
        writeln!(
            f,
            r#"<meta property="og:image" content="{}" />"#,
            escape_html(&self.og_image)
        )?;

        writeln!(f, r#"<meta property="twitter:card" content="summary_large_image" />"#)?;
        writeln!(f, r#"<meta property="twitter:url" content="{url}" />"#)?;
        writeln!(f, r#"<meta property="twitter:title" content="{title}" />"#)?;
        writeln!(f, r#"<meta property="twitter:description" content="{description}" />"#)?;
        writeln!(
            f,
            r#"<meta property="twitter:image" content="{}" />"#,
            escape_html(&self.twitter_image)
        )?;

        for schema in &self.schemas {
            writeln!(
                f,
                r#"<script type="application/ld+json">{}</script>"#,
                escape_script(&schema.to_string())
            )?;
        }
        Ok(())
    }
}

/// Escape text for use in element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

// JSON inside <script> only needs to avoid closing the element early.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
