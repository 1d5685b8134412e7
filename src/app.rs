//! src/app.rs
//!
//! Terminal host: builds the configured graphs, wires up the hit sources and
//! runs the UI loop.
//!
//! # Keyboard controls
//!
//! - **Tab**: cycle focus among graphs; the focused graph is highlighted.
//! - **Space**: add one hit to the focused graph.
//! - **s** / **x**: start / stop the focused graph.
//! - **q**: quit and restore the terminal.
//!
//! # Remote control
//!
//! Unless `--no-remote` is given, a line-based TCP server listens on
//! `--listen` (default `127.0.0.1:4000`). `<idx>` is the position of the graph
//! in the configuration.
//!
//! ```text
//! $ nc 127.0.0.1 4000
//! hit 0 5
//! OK
//! stats 0
//! OK running=true pending=5 ticks=120 peak=9 ceiling=12 hps=- fps=-
//! quit
//! OK bye
//! ```
//!
//! # Configuration
//!
//! Without `--config` one preset graph per variant is shown. A config file
//! lists graphs as `[[graph]]` tables:
//!
//! ```toml
//! [[graph]]
//! name = "requests"
//! variant = "skyline"
//! accent = "green"
//! width = 600
//! height = 200
//! frameRate = 30
//! ```

use std::sync::PoisonError;
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, error, info};
use ratatui::layout::Constraint;

use hitgraph::clock::SystemClock;
use hitgraph::frame::{FrameScheduler, RepaintScheduler, TimerScheduler};
use hitgraph::graph::shared::{GraphShared, SharedGraph, share};
use hitgraph::net::remote::remote_server;
use hitgraph::panels::{GraphPanel, HistoryPanel, InfoPanel, ParagraphPanel, TitlePanel};
use hitgraph::settings::{GraphEntry, Settings};
use hitgraph::source::{start_demo_traffic, start_serial_reader};
use hitgraph::ui::{Node, columns, leaf, rows};

use crate::cli::Cli;

const FRAME_TIME: Duration = Duration::from_millis(16);

fn build_graph(entry: &GraphEntry, cli: &Cli) -> color_eyre::Result<SharedGraph> {
    let mut options = entry.options.clone();
    if cli.guard_start {
        options.start_guard = Some(true);
    }
    let scheduler: Box<dyn FrameScheduler + Send + Sync> = if cli.timer_frames {
        Box::new(TimerScheduler::new(Box::new(SystemClock::new())))
    } else {
        Box::new(RepaintScheduler::new())
    };
    let graph = GraphShared::from_options(
        &options,
        &entry.name,
        entry.variant,
        entry.accent_colour(),
        Box::new(SystemClock::new()),
        scheduler,
    )
    .wrap_err_with(|| format!("graph {:?}", entry.name))?;
    Ok(share(graph))
}

fn layout(graphs: &[SharedGraph], focused: usize) -> Node {
    let n = graphs.len() as u32;
    let regions = graphs
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let region = columns(vec![
                (
                    Constraint::Percentage(70),
                    leaf(GraphPanel::new(g.clone()).highlighted(i == focused)),
                ),
                (
                    Constraint::Percentage(30),
                    rows(vec![
                        (
                            Constraint::Length(10),
                            leaf(InfoPanel::new(g.clone()).highlighted(i == focused)),
                        ),
                        (Constraint::Min(0), leaf(HistoryPanel::new(g.clone()))),
                    ]),
                ),
            ]);
            (Constraint::Ratio(1, n), region)
        })
        .collect();

    rows(vec![
        (
            Constraint::Length(3),
            leaf(TitlePanel::new("hitgraph", graphs.to_vec())),
        ),
        (Constraint::Min(0), rows(regions)),
        (
            Constraint::Length(3),
            leaf(ParagraphPanel::new(
                "TAB=Focus  SPACE=Hit  S=Start  X=Stop  Q=Quit",
                "Controls",
            )),
        ),
    ])
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path).wrap_err("loading graph settings")?,
        None => Settings::presets(cli.variant),
    };
    if settings.graphs.is_empty() {
        color_eyre::eyre::bail!("no graphs configured");
    }

    let graphs = settings
        .graphs
        .iter()
        .map(|entry| build_graph(entry, &cli))
        .collect::<color_eyre::Result<Vec<_>>>()?;
    for g in &graphs {
        g.write().unwrap_or_else(PoisonError::into_inner).graph.start();
    }
    info!("{} graph(s) running", graphs.len());

    if !cli.no_remote {
        let graphs_for_thread = graphs.clone();
        let addr = cli.listen.clone();
        thread::spawn(move || {
            if let Err(e) = remote_server(&addr, graphs_for_thread) {
                error!("remote server on {} failed: {}", addr, e);
            }
        });
    }
    if let Some(port) = &cli.serial {
        start_serial_reader(port, cli.baud, graphs.clone());
    }
    start_demo_traffic(cli.demo_rate, graphs.clone());

    let mut terminal = ratatui::init();
    let result = ui_loop(&mut terminal, &graphs);
    ratatui::restore();
    result
}

fn ui_loop(terminal: &mut ratatui::DefaultTerminal, graphs: &[SharedGraph]) -> color_eyre::Result<()> {
    let mut focused = 0usize;

    loop {
        let frame_start = Instant::now();

        for g in graphs {
            g.write().unwrap_or_else(PoisonError::into_inner).graph.pump();
        }

        let root = layout(graphs, focused);
        terminal.draw(|f| {
            let area = f.area();
            root.draw(f, area)
        })?;

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let mut g = graphs[focused].write().unwrap_or_else(PoisonError::into_inner);
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => {
                    drop(g);
                    focused = (focused + 1) % graphs.len();
                }
                KeyCode::Char(' ') => g.graph.add_hit(),
                KeyCode::Char('s') => g.graph.start(),
                KeyCode::Char('x') => g.graph.stop(),
                other => debug!("unbound key {:?}", other),
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
