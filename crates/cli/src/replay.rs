//! Scripted replay of navigation events.
//!
//! A script is a JSON array of steps. Each step is fed to a navigation
//! component mounted on an in-memory page that has every watched section, and
//! every snapshot the component commits is written as one JSON line, followed
//! by any navigation requests the step produced.

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use techevents_nav::{
    MemoryEnvironment, NavigationComponent, NavigationViewState, PlatformEvent, Renderer, ScrollClassifier,
    SectionObserver,
};
use techevents_types::{Bounds, Effect, Href, IntersectionEntry, Point};
use techevents_util::Settings;
use tracing::{debug, info};

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Scroll(f64),
    Intersections(Vec<IntersectionEntry>),
    PointerDown(Point),
    Toggle,
    Select(Href),
    /// Where the mobile overlay is drawn; `null` when it is not.
    Overlay(Option<Bounds>),
    Mount,
    Unmount,
}

/// A line of replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
enum ReplayRecord {
    Snapshot(NavigationViewState),
    Effect(Effect),
}

#[derive(Debug, Default)]
struct SnapshotBuffer {
    pending: Vec<NavigationViewState>,
}

impl Renderer for SnapshotBuffer {
    fn render(&mut self, snapshot: &NavigationViewState) {
        self.pending.push(*snapshot);
    }
}

/// Runs `steps` and writes the resulting records to `out`. The component is
/// mounted before the first step.
pub fn run(steps: &[ScriptStep], settings: &Settings, out: &mut impl Write) -> Result<()> {
    let mut env = MemoryEnvironment::with_all_regions();
    let mut nav = NavigationComponent::new(
        ScrollClassifier::new(settings.scroll_threshold),
        SectionObserver::new(settings.observer_options(), settings.tie_break),
        SnapshotBuffer::default(),
    );
    nav.mount(&mut env);
    flush(&mut nav, Vec::new(), out)?;

    for (index, step) in steps.iter().enumerate() {
        debug!(index, ?step, "replaying step");
        let effects = match step {
            ScriptStep::Select(href) => nav.select_link(&mut env, *href),
            other => {
                apply(&mut nav, &mut env, other);
                Vec::new()
            }
        };
        flush(&mut nav, effects, out)?;
    }

    info!(steps = steps.len(), listeners = env.listeners().len(), "replay finished");
    Ok(())
}

fn apply(nav: &mut NavigationComponent<SnapshotBuffer>, env: &mut MemoryEnvironment, step: &ScriptStep) {
    match step {
        ScriptStep::Scroll(offset) => nav.handle_platform_event(env, PlatformEvent::Scroll(*offset)),
        ScriptStep::Intersections(batch) => nav.handle_platform_event(env, PlatformEvent::Intersections(batch.clone())),
        ScriptStep::PointerDown(point) => nav.handle_platform_event(env, PlatformEvent::PointerDown(*point)),
        ScriptStep::Toggle => nav.toggle(env),
        ScriptStep::Overlay(bounds) => nav.set_overlay_bounds(*bounds),
        ScriptStep::Mount => nav.mount(env),
        ScriptStep::Unmount => nav.unmount(env),
        ScriptStep::Select(_) => {}
    }
}

fn flush(nav: &mut NavigationComponent<SnapshotBuffer>, effects: Vec<Effect>, out: &mut impl Write) -> Result<()> {
    let snapshots = std::mem::take(&mut nav.renderer_mut().pending);
    let records = snapshots
        .into_iter()
        .map(ReplayRecord::Snapshot)
        .chain(effects.into_iter().map(ReplayRecord::Effect));
    for record in records {
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn replay(script: Value) -> Vec<Value> {
        let steps: Vec<ScriptStep> = serde_json::from_value(script).unwrap();
        let mut out = Vec::new();
        run(&steps, &Settings::default(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn snapshot(scrolled: bool, active: &str, menu_open: bool) -> Value {
        json!({"snapshot": {"scrolled": scrolled, "active_section": active, "menu_open": menu_open}})
    }

    #[test]
    fn scroll_observe_and_select() {
        let records = replay(json!([
            {"scroll": 120.0},
            {"intersections": [
                {"section": "home", "is_intersecting": true, "intersection_ratio": 0.6},
                {"section": "event", "is_intersecting": true, "intersection_ratio": 0.8},
                {"section": "eventform", "is_intersecting": false, "intersection_ratio": 0.1}
            ]},
            {"select": "/"}
        ]));
        assert_eq!(
            records,
            vec![
                snapshot(false, "", false),
                snapshot(true, "", false),
                snapshot(true, "#event", false),
                snapshot(true, "#home", false),
                json!({"effect": {"navigate": "/"}}),
            ]
        );
    }

    #[test]
    fn unchanged_steps_print_nothing() {
        let records = replay(json!([{"scroll": 10.0}, {"scroll": 20.0}, {"pointer_down": {"x": 1, "y": 1}}]));
        assert_eq!(records, vec![snapshot(false, "", false)]);
    }

    #[test]
    fn outside_click_closes_the_menu() {
        let records = replay(json!([
            {"overlay": {"x": 0, "y": 3, "width": 30, "height": 20}},
            "toggle",
            {"pointer_down": {"x": 10, "y": 10}},
            {"pointer_down": {"x": 50, "y": 10}},
            "unmount",
            "toggle"
        ]));
        assert_eq!(
            records,
            vec![
                snapshot(false, "", false),
                snapshot(false, "", true),
                snapshot(false, "", false),
            ]
        );
    }
}
