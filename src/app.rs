// App - single owner of the masonry configuration and its current render

use crate::action::{apply, Action, Transition};
use crate::config::{AppConfig, MasonryConfig};
use crate::display::panel::Control;
use crate::grid::{render, Placement, Render};
use crate::loop_timer::LoopTimer;
use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub timestamp: Instant,
    pub message: String,
    pub level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Action,
    Ignored,
    Tick,
    Info,
}

pub struct App<R: Rng = ThreadRng> {
    config: MasonryConfig,
    render: Render,
    placement: Placement,
    timer: LoopTimer,
    rng: R,
    renders: u64,
    logs: VecDeque<LogEntry>,
    max_log_entries: usize,
    pub focus: usize,
    pub scroll: u32,
    pub show_panel: bool,
    pub show_log: bool,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App<ThreadRng> {
    pub fn new(settings: &AppConfig) -> Self {
        Self::with_rng(settings, rand::thread_rng())
    }
}

impl<R: Rng> App<R> {
    pub fn with_rng(settings: &AppConfig, mut rng: R) -> Self {
        let config = MasonryConfig::default();
        let render = render(&config, &mut rng);
        let placement = Placement::compute(&render.tiles, render.template.columns);
        let mut app = Self {
            config,
            render,
            placement,
            timer: LoopTimer::new(settings.loop_interval()),
            rng,
            renders: 1,
            logs: VecDeque::new(),
            max_log_entries: settings.max_log_entries.max(1),
            focus: 0,
            scroll: 0,
            show_panel: settings.display.show_panel,
            show_log: settings.display.show_log,
            show_help: false,
            should_quit: false,
        };
        app.add_log(LogLevel::Info, "Masonry started with default configuration".to_string());
        app
    }

    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    pub fn current_render(&self) -> &Render {
        &self.render
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn timer(&self) -> &LoopTimer {
        &self.timer
    }

    /// Number of projections made so far, the initial one included
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn logs(&self) -> &VecDeque<LogEntry> {
        &self.logs
    }

    pub fn add_log(&mut self, level: LogLevel, message: String) {
        self.logs.push_back(LogEntry {
            timestamp: Instant::now(),
            message,
            level,
        });
        while self.logs.len() > self.max_log_entries {
            self.logs.pop_front();
        }
    }

    /// Runs a control's action; returns whether the configuration was replaced
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match apply(self.config, action, &mut self.rng) {
            Transition::Changed(next) => {
                self.add_log(LogLevel::Action, action.to_string());
                self.commit(next, now);
                true
            }
            Transition::Unchanged => {
                let reason = if action.is_enabled(&self.config) {
                    "at floor"
                } else {
                    "disabled while looping"
                };
                debug!("Ignored {} ({})", action, reason);
                self.add_log(LogLevel::Ignored, format!("{} ({})", action, reason));
                false
            }
        }
    }

    /// Fires the loop timer when due. The regeneration bypasses the disabled controls.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        let next = self.config.regenerate(&mut self.rng);
        trace!("Loop tick #{} -> {} tiles", self.timer.fired(), next.min_value);
        self.add_log(
            LogLevel::Tick,
            format!("Loop regenerate: {} blocks", next.min_value),
        );
        self.commit(next, now);
        true
    }

    /// How long the event loop may block before the next thing is due
    pub fn next_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        match self.timer.remaining(now) {
            Some(remaining) => remaining.min(tick_rate),
            None => tick_rate,
        }
    }

    fn commit(&mut self, next: MasonryConfig, now: Instant) {
        let previous_loop = self.config.looping;
        self.config = next;
        self.render = render(&self.config, &mut self.rng);
        self.placement = Placement::compute(&self.render.tiles, self.render.template.columns);
        self.renders += 1;
        self.scroll = self.scroll.min(self.max_scroll());

        if previous_loop != next.looping {
            info!("Loop mode {}", if next.looping { "on" } else { "off" });
        }
        if self.timer.sync(self.config.looping, now) {
            trace!("Loop timer armed for {:?}", self.timer.interval());
        }
        match serde_json::to_string(&self.config) {
            Ok(snapshot) => debug!("Configuration: {}", snapshot),
            Err(e) => debug!("Configuration snapshot failed: {}", e),
        }
    }

    pub fn max_scroll(&self) -> u32 {
        self.placement.rows.saturating_sub(1)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = self.scroll as i64 + delta as i64;
        self.scroll = target.clamp(0, self.max_scroll() as i64) as u32;
    }

    pub fn focused_control(&self) -> Control {
        Control::ALL[self.focus % Control::ALL.len()]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Control::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + Control::ALL.len() - 1) % Control::ALL.len();
    }
}
