//! Subcommand implementations
//!
//! Each command returns a report; printing is left to the binary.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use clubsite_animation::{RevealId, RevealPhase, RevealScheduler};
use clubsite_content::{DataKind, PagePlan, Route, SeoMeta, SiteData};
use clubsite_theme::{ColorScheme, InitialSource, RootClassList, ThemeState};

use crate::config::SiteConfig;

/// Safety stop for the reveal preview, in simulated seconds
const MAX_SETTLE_TIME: f32 = 30.0;

// ========== check ==========

/// Outcome of loading one data file
#[derive(Debug)]
pub struct CheckLine {
    pub kind: DataKind,
    pub result: Result<usize, String>,
}

#[derive(Debug)]
pub struct CheckReport {
    pub lines: Vec<CheckLine>,
}

impl CheckReport {
    pub fn from_data(data: &SiteData) -> Self {
        fn line<T>(
            kind: DataKind,
            result: &clubsite_content::Result<T>,
            count: impl Fn(&T) -> usize,
        ) -> CheckLine {
            CheckLine {
                kind,
                result: result.as_ref().map(count).map_err(|err| err.to_string()),
            }
        }

        Self {
            lines: vec![
                line(DataKind::Events, &data.events, Vec::len),
                line(DataKind::Projects, &data.projects, Vec::len),
                line(DataKind::Team, &data.team, |team| team.member_count()),
                line(DataKind::Contact, &data.contact, |contact| {
                    [
                        &contact.address,
                        &contact.email,
                        &contact.phone,
                        &contact.github,
                        &contact.linkedin,
                        &contact.instagram,
                    ]
                    .into_iter()
                    .filter(|field| field.is_some())
                    .count()
                }),
            ],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.lines.iter().all(|line| line.result.is_ok())
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match &line.result {
                Ok(count) => writeln!(f, "ok     {:<10} {count} entries", line.kind.to_string())?,
                Err(err) => writeln!(f, "error  {:<10} {err}", line.kind.to_string())?,
            }
        }
        Ok(())
    }
}

pub async fn check(config: &SiteConfig) -> CheckReport {
    let source = config.data_source();
    tracing::info!(dir = %source.root().display(), "checking site data");
    let data = source.load_all().await;
    CheckReport::from_data(&data)
}

// ========== meta ==========

pub fn meta(config: &SiteConfig, path: &str) -> String {
    SeoMeta::for_path(path, &config.site).to_html()
}

// ========== theme ==========

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Reset,
}

#[derive(Debug, PartialEq)]
pub struct ThemeReport {
    pub scheme: ColorScheme,
    pub source: InitialSource,
    pub root_tag: String,
    pub show_toggle: bool,
    /// Custom properties for the active palette
    pub css: String,
}

impl fmt::Display for ThemeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scheme:  {}", self.scheme)?;
        writeln!(f, "source:  {:?}", self.source)?;
        writeln!(f, "root:    {}", self.root_tag)?;
        writeln!(
            f,
            "toggle:  {}",
            if self.show_toggle { "shown" } else { "hidden" }
        )?;
        write!(f, "{}", self.css)
    }
}

pub fn theme(config: &SiteConfig, action: ThemeAction) -> ThemeReport {
    let root = Arc::new(RootClassList::new());
    let state = ThemeState::init(config.theme_options(Arc::clone(&root)));
    let source = state.initial_source();

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            let scheme = state.toggle();
            tracing::info!(%scheme, "theme toggled");
        }
        ThemeAction::Reset => {
            state.forget_choice();
            tracing::info!("stored theme choice cleared");
        }
    }

    let report = ThemeReport {
        scheme: state.scheme(),
        source,
        root_tag: root.to_html_tag(),
        show_toggle: config.theme.show_toggle,
        css: state.colors().to_css_rule(":root"),
    };
    state.shutdown();
    report
}

// ========== reveal ==========

/// One transition in the reveal preview
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    /// Simulated seconds since the page mounted
    pub time: f32,
    pub scroll_y: f32,
    pub label: String,
    pub preset: &'static str,
    pub phase: RevealPhase,
}

#[derive(Debug, Default)]
pub struct RevealTimeline {
    pub route: Route,
    pub regions: usize,
    pub entries: Vec<TimelineEntry>,
}

impl RevealTimeline {
    /// Regions that reached `Visible`
    pub fn revealed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.phase == RevealPhase::Visible)
            .count()
    }
}

impl fmt::Display for RevealTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} regions)", self.route, self.regions)?;
        for entry in &self.entries {
            let phase = match entry.phase {
                RevealPhase::Hidden => "hidden",
                RevealPhase::Entering => "entering",
                RevealPhase::Visible => "visible",
            };
            writeln!(
                f,
                "{:>8.3}s  y={:<6.0} {:<9} {} ({})",
                entry.time, entry.scroll_y, phase, entry.label, entry.preset
            )?;
        }
        write!(f, "{} of {} regions revealed", self.revealed(), self.regions)
    }
}

struct Preview<'a> {
    plan: &'a PagePlan,
    labels: HashMap<RevealId, usize>,
    time: f32,
    scroll_y: f32,
    entries: Vec<TimelineEntry>,
}

impl Preview<'_> {
    fn record(&mut self, id: RevealId, phase: RevealPhase) {
        let Some(&index) = self.labels.get(&id) else {
            return;
        };
        let reveal = &self.plan.reveals[index];
        tracing::debug!(
            label = %reveal.label,
            ?phase,
            time = self.time,
            scroll_y = self.scroll_y,
            "reveal transition"
        );
        self.entries.push(TimelineEntry {
            time: self.time,
            scroll_y: self.scroll_y,
            label: reveal.label.clone(),
            preset: reveal.config.preset.name(),
            phase,
        });
    }

    /// Tick frames for `seconds`, recording regions that finish
    fn run(&mut self, scheduler: &mut RevealScheduler, seconds: f32, dt: f32) {
        let frames = (seconds / dt).ceil().max(1.0) as usize;
        for _ in 0..frames {
            self.time += dt;
            for id in scheduler.tick(dt) {
                self.record(id, RevealPhase::Visible);
            }
        }
    }
}

/// Mount a page's reveal plan and scroll through it top to bottom
pub fn reveal(config: &SiteConfig, path: &str, data: &SiteData) -> RevealTimeline {
    let route = Route::from_path(path);
    let plan = PagePlan::for_route(route, data);
    let settings = &config.reveal;
    let dt = settings.frame_dt();

    let mut scheduler = RevealScheduler::new(settings.viewport());
    let ids = plan.mount(&mut scheduler);

    let mut preview = Preview {
        plan: &plan,
        labels: ids.iter().enumerate().map(|(i, id)| (*id, i)).collect(),
        time: 0.0,
        scroll_y: 0.0,
        entries: Vec::new(),
    };

    for id in &ids {
        if scheduler.phase(*id) == Some(RevealPhase::Entering) {
            preview.record(*id, RevealPhase::Entering);
        }
    }

    let max_scroll = (plan.height - settings.viewport_height).max(0.0);
    let step = settings.scroll_step.max(1.0);
    loop {
        preview.run(&mut scheduler, settings.dwell, dt);
        if preview.scroll_y >= max_scroll {
            break;
        }
        preview.scroll_y = (preview.scroll_y + step).min(max_scroll);
        for id in scheduler.scroll_to(preview.scroll_y) {
            preview.record(id, RevealPhase::Entering);
        }
    }

    let deadline = preview.time + MAX_SETTLE_TIME;
    while scheduler.is_animating() && preview.time < deadline {
        preview.run(&mut scheduler, dt, dt);
    }
    if scheduler.is_animating() {
        tracing::warn!(%route, "reveal preview stopped with regions still entering");
    }

    tracing::info!(%route, regions = plan.len(), "reveal preview finished");
    RevealTimeline {
        route,
        regions: plan.len(),
        entries: preview.entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubsite_theme::ColorTokens;
    use pretty_assertions::assert_eq;

    fn config_in(dir: &std::path::Path) -> SiteConfig {
        let toml = format!(
            "[theme]\nstorage_path = {:?}\nprefer = \"light\"\n",
            dir.join("theme.json")
        );
        SiteConfig::from_toml(&toml).unwrap()
    }

    #[test]
    fn test_theme_toggle_persists_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let first = theme(&config, ThemeAction::Show);
        assert_eq!(first.scheme, ColorScheme::Light);
        assert_eq!(first.source, InitialSource::Ambient);
        assert_eq!(first.root_tag, r#"<html data-theme="light">"#);

        let toggled = theme(&config, ThemeAction::Toggle);
        assert_eq!(toggled.scheme, ColorScheme::Dark);
        assert_eq!(toggled.root_tag, r#"<html class="dark" data-theme="dark">"#);
        assert_eq!(toggled.css, ColorTokens::dark().to_css_rule(":root"));

        let again = theme(&config, ThemeAction::Show);
        assert_eq!(again.scheme, ColorScheme::Dark);
        assert_eq!(again.source, InitialSource::Stored);

        theme(&config, ThemeAction::Reset);
        let reset = theme(&config, ThemeAction::Show);
        assert_eq!(reset.scheme, ColorScheme::Light);
        assert_eq!(reset.source, InitialSource::Ambient);
    }

    #[test]
    fn test_reveal_preview_reveals_every_region_once() {
        let config = SiteConfig::default();
        let timeline = reveal(&config, "/join", &SiteData::empty());

        assert!(timeline.regions > 0);
        assert_eq!(timeline.revealed(), timeline.regions);

        let entering = timeline
            .entries
            .iter()
            .filter(|e| e.phase == RevealPhase::Entering)
            .count();
        assert_eq!(entering, timeline.regions);
    }

    #[test]
    fn test_reveal_preview_orders_entry_before_visible() {
        let config = SiteConfig::default();
        let timeline = reveal(&config, "/contact", &SiteData::empty());

        for label in ["Get in Touch", "Map"] {
            let times: Vec<(RevealPhase, f32)> = timeline
                .entries
                .iter()
                .filter(|e| e.label == label)
                .map(|e| (e.phase, e.time))
                .collect();
            assert_eq!(times.len(), 2, "{label}");
            assert_eq!(times[0].0, RevealPhase::Entering);
            assert_eq!(times[1].0, RevealPhase::Visible);
            assert!(times[0].1 < times[1].1);
        }
    }

    #[test]
    fn test_not_found_preview_is_empty() {
        let timeline = reveal(&SiteConfig::default(), "/missing", &SiteData::empty());
        assert_eq!(timeline.route, Route::NotFound);
        assert!(timeline.entries.is_empty());
    }

    #[test]
    fn test_meta_renders_head() {
        let html = meta(&SiteConfig::default(), "/projects");
        assert!(html.starts_with("<title>Student-Led Software Projects | AITM Coding Club</title>"));
        assert!(html.contains("BreadcrumbList"));
    }
}
