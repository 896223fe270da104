//! Reveal plans for each page
//!
//! A [`PagePlan`] lists every scroll-revealed region of a page in document
//! order, with a rectangle from a simple top-down desktop layout and the
//! reveal configuration the region uses. Mounting a plan into a
//! [`RevealScheduler`] gives a page that animates in as it is scrolled.

use clubsite_animation::{RevealConfig, RevealId, RevealPreset, RevealScheduler, StaggerConfig};
use clubsite_core::Rect;

use crate::data::SiteData;
use crate::routes::Route;

/// Layout width of a page
pub const PAGE_WIDTH: f32 = 1280.0;

/// Height of the static hero banner above the first revealed section
pub const HERO_HEIGHT: f32 = 480.0;

const GUTTER: f32 = 64.0;
const SECTION_GAP: f32 = 96.0;
const HEADING_HEIGHT: f32 = 96.0;
const GRID_GAP: f32 = 32.0;

/// Delay of the second column in a two-column section
pub const PAIRED_COLUMN_DELAY: f32 = 0.2;

/// One region that reveals on scroll
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedReveal {
    pub label: String,
    pub rect: Rect,
    pub config: RevealConfig,
}

/// Ordered reveal regions for one route
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagePlan {
    pub route: Route,
    pub reveals: Vec<PlannedReveal>,
    /// Total document height
    pub height: f32,
}

impl PagePlan {
    pub fn for_route(route: Route, data: &SiteData) -> Self {
        let mut page = PageBuilder::new();

        match route {
            Route::Home => {
                page.heading("What We Offer");
                page.grid(
                    ["Hands-on Workshops", "Collaborative Projects", "Hackathons & Competitions"],
                    3,
                    260.0,
                );
                page.pair("Our Mission", "Mission Highlights", 360.0);
                page.heading("Our Impact");
                page.sequence(
                    ["Active Members", "Workshops Conducted", "Hackathons Organized", "Projects Completed"],
                    4,
                    140.0,
                    0.1,
                );
                page.block("Call to Action", 240.0, RevealConfig::default());
            }
            Route::About => {
                page.grid(["Our Vision", "Our Mission"], 2, 220.0);
                page.heading("Our Core Values");
                page.grid(
                    [
                        "Inclusivity & Diversity",
                        "Collaboration & Peer Learning",
                        "Innovation & Excellence",
                        "Community Impact",
                        "Transparency & Accountability",
                    ],
                    3,
                    200.0,
                );
                page.heading("Our Objectives");
                page.pair("Objectives: Learning", "Objectives: Growth", 420.0);
                page.heading("Frequently Asked Questions");
                page.grid(
                    [
                        "How can I join the AITM Coding Club?",
                        "Are there any membership fees?",
                        "Do I need prior coding experience to join?",
                        "How frequently does the club organize events?",
                        "Can I suggest or lead a workshop on a specific topic?",
                    ],
                    1,
                    120.0,
                );
            }
            Route::Events => {
                page.heading("Upcoming Events");
                if let Ok(events) = &data.events {
                    page.grid(
                        events.iter().map(|event| format!("Event: {}", event.title)),
                        3,
                        420.0,
                    );
                }
                page.heading("Featured Event");
                page.block(
                    "Featured Event Details",
                    400.0,
                    RevealConfig::default().delay(0.1),
                );
                page.heading("Frequently Asked Questions");
                page.grid(
                    [
                        "How can I participate in these events?",
                        "Are these events only for experienced programmers?",
                        "Can I propose an event idea?",
                    ],
                    1,
                    120.0,
                );
                page.block("Call to Action", 240.0, RevealConfig::default());
            }
            Route::Projects => {
                page.heading("Flagship Projects");
                if let Ok(projects) = &data.projects {
                    page.grid(
                        projects
                            .iter()
                            .map(|project| format!("Project: {}", project.title)),
                        1,
                        360.0,
                    );
                }
                page.heading("Other Notable Projects");
                page.sequence(
                    ["Notable Project 1", "Notable Project 2", "Notable Project 3"],
                    3,
                    280.0,
                    0.1,
                );
                page.block("Explore Our GitHub Organization", 240.0, RevealConfig::default());
                page.pair("Want to Contribute?", "Contribution Guide", 420.0);
            }
            Route::Team => {
                page.heading("Executive Committee");
                if let Ok(team) = &data.team {
                    page.grid(
                        team.executive
                            .iter()
                            .map(|member| format!("Executive: {}", member.name)),
                        3,
                        380.0,
                    );
                }
                page.heading("Technical Domain Leaders");
                if let Ok(team) = &data.team {
                    page.grid(
                        team.technical
                            .iter()
                            .map(|lead| format!("Domain: {}", lead.domain)),
                        2,
                        200.0,
                    );
                }
                page.pair("Want to Join Our Team?", "Open Roles", 420.0);
            }
            Route::Join => {
                page.heading("Membership Benefits");
                page.grid(
                    [
                        "Skill Development",
                        "Networking",
                        "Project Experience",
                        "Recognition",
                        "Learning Resources",
                    ],
                    3,
                    220.0,
                );
                page.pair("How to Join", "Application Form", 520.0);
                page.heading("Frequently Asked Questions");
                page.grid(
                    [
                        "Who can join the AITM Coding Club?",
                        "Is there a membership fee?",
                        "What if I'm a complete beginner in programming?",
                    ],
                    1,
                    120.0,
                );
                page.heading("Member Testimonials");
                page.sequence(["Testimonial 1", "Testimonial 2", "Testimonial 3"], 3, 260.0, 0.1);
                page.block("Call to Action", 240.0, RevealConfig::default());
            }
            Route::Contact => {
                page.pair("Get in Touch", "Send us a Message", 560.0);
                page.heading("Find Us");
                page.block("Map", 450.0, RevealConfig::default().delay(0.2));
            }
            Route::NotFound => {}
        }

        page.finish(route)
    }

    pub fn len(&self) -> usize {
        self.reveals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
    }

    /// Mount every region, in order, returning their ids
    pub fn mount(&self, scheduler: &mut RevealScheduler) -> Vec<RevealId> {
        self.reveals
            .iter()
            .map(|reveal| scheduler.mount(reveal.rect, reveal.config))
            .collect()
    }
}

struct PageBuilder {
    cursor: f32,
    reveals: Vec<PlannedReveal>,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            cursor: HERO_HEIGHT + SECTION_GAP,
            reveals: Vec::new(),
        }
    }

    fn content_width() -> f32 {
        PAGE_WIDTH - GUTTER * 2.0
    }

    fn push(&mut self, label: impl Into<String>, rect: Rect, config: RevealConfig) {
        self.reveals.push(PlannedReveal {
            label: label.into(),
            rect,
            config,
        });
    }

    fn heading(&mut self, label: &str) {
        let rect = Rect::new(GUTTER, self.cursor, Self::content_width(), HEADING_HEIGHT);
        self.push(label, rect, RevealConfig::default());
        self.cursor += HEADING_HEIGHT;
    }

    fn block(&mut self, label: &str, height: f32, config: RevealConfig) {
        let rect = Rect::new(GUTTER, self.cursor, Self::content_width(), height);
        self.push(label, rect, config);
        self.cursor += height + SECTION_GAP;
    }

    /// Grid of cards staggered by index
    fn grid<I, S>(&mut self, labels: I, columns: usize, item_height: f32)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cells(labels, columns, item_height, 0.0);
    }

    /// Grid whose first item already waits one step
    fn sequence<I, S>(&mut self, labels: I, columns: usize, item_height: f32, first_delay: f32)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cells(labels, columns, item_height, first_delay);
    }

    fn cells<I, S>(&mut self, labels: I, columns: usize, item_height: f32, base_delay: f32)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            self.cursor += SECTION_GAP;
            return;
        }

        let columns = columns.max(1);
        let total = labels.len();
        let stagger = StaggerConfig::default();
        let cell_width =
            (Self::content_width() - GRID_GAP * (columns - 1) as f32) / columns as f32;
        let top = self.cursor + GRID_GAP;

        for (index, label) in labels.into_iter().enumerate() {
            let row = index / columns;
            let column = index % columns;
            let rect = Rect::new(
                GUTTER + column as f32 * (cell_width + GRID_GAP),
                top + row as f32 * (item_height + GRID_GAP),
                cell_width,
                item_height,
            );
            let config = stagger.apply(RevealConfig::default().delay(base_delay), index, total);
            self.push(label, rect, config);
        }

        let rows = total.div_ceil(columns);
        self.cursor = top + rows as f32 * (item_height + GRID_GAP) + SECTION_GAP;
    }

    /// Two columns sliding in from opposite sides
    fn pair(&mut self, left: &str, right: &str, height: f32) {
        let width = (Self::content_width() - GUTTER) / 2.0;
        let left_rect = Rect::new(GUTTER, self.cursor, width, height);
        let right_rect = Rect::new(GUTTER * 2.0 + width, self.cursor, width, height);

        self.push(left, left_rect, RevealConfig::new(RevealPreset::FadeRight));
        self.push(
            right,
            right_rect,
            RevealConfig::new(RevealPreset::FadeLeft).delay(PAIRED_COLUMN_DELAY),
        );
        self.cursor += height + SECTION_GAP;
    }

    fn finish(self, route: Route) -> PagePlan {
        tracing::debug!(%route, reveals = self.reveals.len(), "planned page reveals");
        PagePlan {
            route,
            reveals: self.reveals,
            height: self.cursor,
        }
    }
}
