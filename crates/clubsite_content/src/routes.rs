//! Site routes and per-page metadata

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    Events,
    Projects,
    Team,
    Join,
    Contact,
    NotFound,
}

/// A navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// Primary navigation, in display order
pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { label: "Home", route: Route::Home },
    NavLink { label: "About", route: Route::About },
    NavLink { label: "Events", route: Route::Events },
    NavLink { label: "Projects", route: Route::Projects },
    NavLink { label: "Team", route: Route::Team },
    NavLink { label: "Join Us", route: Route::Join },
    NavLink { label: "Contact", route: Route::Contact },
];

/// One step of a breadcrumb trail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: &'static str,
    pub path: &'static str,
}

/// Title, description and extra keywords for a page's head
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::About,
        Route::Events,
        Route::Projects,
        Route::Team,
        Route::Join,
        Route::Contact,
        Route::NotFound,
    ];

    /// Resolve a request path. A trailing slash and query string are ignored;
    /// anything unrecognised is `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            "/events" => Route::Events,
            "/projects" => Route::Projects,
            "/team" => Route::Team,
            "/join" => Route::Join,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Canonical path. `NotFound` has no path of its own and reports `/404`.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Events => "/events",
            Route::Projects => "/projects",
            Route::Team => "/team",
            Route::Join => "/join",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    pub fn label(self) -> &'static str {
        NAV_LINKS
            .iter()
            .find(|link| link.route == self)
            .map_or("Not Found", |link| link.label)
    }

    /// Short page name used in breadcrumb trails
    pub fn name(self) -> &'static str {
        match self {
            Route::Join => "Join",
            other => other.label(),
        }
    }

    /// Home > page trail. Home and the not-found page have none.
    pub fn breadcrumbs(self) -> Vec<Breadcrumb> {
        match self {
            Route::Home | Route::NotFound => Vec::new(),
            _ => vec![
                Breadcrumb { name: "Home", path: "/" },
                Breadcrumb {
                    name: self.name(),
                    path: self.path(),
                },
            ],
        }
    }

    pub fn meta(self) -> PageMeta {
        match self {
            Route::Home => PageMeta {
                title: "Code • Collaborate • Create",
                description: "AITM Coding Club - Fostering a vibrant coding culture that empowers students to become innovators through technology. Join us for workshops, projects, and hackathons.",
                keywords: &[
                    "student coding workshops",
                    "college hackathon",
                    "coding competitions Karnataka",
                    "open source student projects",
                ],
            },
            Route::About => PageMeta {
                title: "About Our Coding Community",
                description: "Learn about AITM Coding Club's vision, mission, values, and objectives. Discover how we empower students through technology and foster innovation.",
                keywords: &[
                    "engineering college coding club",
                    "peer learning community",
                    "coding club values",
                    "student tech innovation",
                ],
            },
            Route::Events => PageMeta {
                title: "Workshops, Hackathons & Coding Events",
                description: "Participate in AITM Coding Club's workshops, hackathons, and coding competitions. View our upcoming and past events calendar.",
                keywords: &[
                    "coding competitions Karnataka",
                    "college hackathon",
                    "student coding workshops",
                    "programming events Bhatkal",
                ],
            },
            Route::Projects => PageMeta {
                title: "Student-Led Software Projects",
                description: "Explore AITM Coding Club's innovative software projects developed by students. From web applications to AI solutions, see how we apply our skills to real-world problems.",
                keywords: &[
                    "open source student projects",
                    "engineering student projects",
                    "coding club projects",
                    "student software development",
                ],
            },
            Route::Team => PageMeta {
                title: "Meet Our Team",
                description: "Meet the dedicated team behind AITM Coding Club. Our executive committee and technical domain leaders work together to create valuable learning experiences.",
                keywords: &[
                    "AITM student leaders",
                    "college coding club team",
                    "student tech organization leaders",
                ],
            },
            Route::Join => PageMeta {
                title: "Join Our Coding Community",
                description: "Become a member of AITM Coding Club and gain access to workshops, mentorship, projects, and a community of like-minded students passionate about technology.",
                keywords: &[
                    "join coding club",
                    "student tech community",
                    "programming club membership",
                    "coding workshops college",
                ],
            },
            Route::Contact => PageMeta {
                title: "Contact Us",
                description: "Get in touch with AITM Coding Club. Reach out to us for questions, collaborations, event proposals, or to join our community.",
                keywords: &[
                    "contact coding club",
                    "AITM student clubs",
                    "programming club contact",
                    "coding community bhatkal",
                ],
            },
            Route::NotFound => PageMeta {
                title: "Page Not Found",
                description: "The page you're looking for doesn't exist or has been moved.",
                keywords: &[],
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
