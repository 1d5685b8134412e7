use hitgraph::clock::ManualClock;
use hitgraph::error::GraphError;
use hitgraph::frame::RepaintScheduler;
use hitgraph::graph::{GraphConfig, GraphOptions, HitGraph};
use hitgraph::stage::Stage;
use hitgraph::surface::RecordingSurface;

type Graph = HitGraph<std::sync::Arc<std::sync::RwLock<RecordingSurface>>>;

fn build(
    stage: Option<&Stage<RecordingSurface>>,
    options: &GraphOptions,
    clock: &ManualClock,
) -> Result<Graph, GraphError> {
    HitGraph::from_options(
        stage,
        options,
        GraphConfig::skyline(),
        Box::new(clock.clone()),
        Box::new(RepaintScheduler::new()),
    )
}

#[test]
fn one_hit_draws_the_rightmost_bar() {
    let stage = Stage::template("hg");
    let clock = ManualClock::new(0.0);
    let mut options = GraphOptions::with_size(780.0, 280.0);
    options.bar_width = Some(4.0);
    options.bar_spacing = Some(2.0);
    options.gutter = Some(40.0);
    let mut graph = build(Some(&stage), &options, &clock).unwrap();

    graph.start();
    graph.add_hit();
    let history = stage.history().unwrap();
    history.write().unwrap().clear_ops();

    clock.advance(60.0);
    assert_eq!(graph.pump(), 1);

    assert_eq!(graph.history().latest(), Some(1));
    assert_eq!(graph.max_axes_point(), Some(4));
    let rects = history.read().unwrap().fill_rects();
    assert_eq!(rects.first(), Some(&[736.0, 190.0, 4.0, 50.0]));
    // every other slot is empty
    assert!(rects[1..].iter().all(|r| r[3] == 0.0));

    let labels: Vec<String> = stage
        .background()
        .unwrap()
        .read()
        .unwrap()
        .fill_texts()
        .into_iter()
        .map(|(text, _, _)| text)
        .collect();
    assert!(labels.contains(&"4".to_string()));
}

#[test]
fn nothing_is_sampled_before_an_interval_passes() {
    let stage = Stage::template("hg");
    let clock = ManualClock::new(0.0);
    let mut graph = build(Some(&stage), &GraphOptions::with_size(300.0, 100.0), &clock).unwrap();

    graph.start();
    graph.add_hits(3);
    clock.advance(20.0);
    graph.pump();
    assert_eq!(graph.ticks(), 0);
    assert_eq!(graph.pending_hits(), 3);

    clock.advance(40.0);
    graph.pump();
    assert_eq!(graph.ticks(), 1);
    assert_eq!(graph.pending_hits(), 0);
    assert_eq!(graph.history().latest(), Some(3));
}

#[test]
fn options_are_validated_in_order() {
    let stage = Stage::template("hg");
    let clock = ManualClock::new(0.0);
    let mut bad = GraphOptions::default();
    bad.width = Some(toml::Value::String("wide".into()));
    bad.height = Some(toml::Value::String("tall".into()));

    assert_eq!(
        build(None, &bad, &clock).err(),
        Some(GraphError::MissingContainer)
    );
    assert_eq!(
        build(Some(&stage), &bad, &clock).err(),
        Some(GraphError::InvalidHeight)
    );

    bad.height = Some(toml::Value::Integer(200));
    assert_eq!(
        build(Some(&stage), &bad, &clock).err(),
        Some(GraphError::InvalidWidth)
    );

    bad.width = Some(toml::Value::Float(f64::NAN));
    assert_eq!(
        build(Some(&stage), &bad, &clock).err(),
        Some(GraphError::InvalidWidth)
    );

    bad.width = Some(toml::Value::Integer(400));
    assert!(build(Some(&stage), &bad, &clock).is_ok());

    let bare = Stage::new("hg");
    assert_eq!(
        build(Some(&bare), &bad, &clock).err(),
        Some(GraphError::MissingSurface("background".into()))
    );
}

#[test]
fn config_file_builds_graphs() {
    let settings = hitgraph::settings::Settings::parse(
        r##"
        [[graph]]
        name = "requests"
        variant = "activity"
        width = 400
        height = 120
        "##,
    )
    .unwrap();
    let entry = &settings.graphs[0];
    let clock = ManualClock::new(0.0);
    let stage: Stage<RecordingSurface> = Stage::template("ag");
    let graph = HitGraph::from_options(
        Some(&stage),
        &entry.options,
        GraphConfig::for_variant(entry.variant),
        Box::new(clock),
        Box::new(RepaintScheduler::new()),
    )
    .unwrap();
    assert_eq!(graph.config().width, 400.0);
    assert!(!graph.config().rescale_axes);
    assert_eq!(graph.config().frame_rate, 10.0);
}

#[test]
fn oversized_options_are_clamped() {
    let stage = Stage::template("hg");
    let clock = ManualClock::new(0.0);
    let mut graph = build(Some(&stage), &GraphOptions::with_size(1e10, 1e10), &clock).unwrap();
    assert_eq!(graph.config().width, 4096.0);
    assert_eq!(graph.config().height, 4096.0);

    graph.start();
    graph.add_hit();
    clock.advance(60.0);
    graph.pump();
    assert_eq!(graph.history().len(), 682);
    assert_eq!(graph.history().latest(), Some(1));
}
