//! Integration tests for the tokio host loop.
//!
//! Time is paused, so a full one-minute execution runs instantly while the
//! host still sees one tick per virtual second.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{Local, NaiveDate, TimeDelta};
use moneywap_engine::config::load_config_from_string;
use moneywap_engine::infrastructure::broker::PaperOrderSink;
use moneywap_engine::infrastructure::host::{AlgoHost, run_paper_session};
use moneywap_engine::infrastructure::market_data::InMemoryQuoteBook;
use moneywap_engine::infrastructure::observer::RecordingObserver;
use moneywap_engine::{
    AlgoStatus, DeadlineTime, ExecutionConfig, ExecutionController, ExecutionPorts, Fill,
    InstrumentId, ManualClock, OrderSide, Quote,
};
use rust_decimal_macros::dec;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

type Controller =
    ExecutionController<InMemoryQuoteBook, PaperOrderSink, RecordingObserver, ManualClock>;

fn controller(sink: Arc<PaperOrderSink>) -> Controller {
    let book = Arc::new(InMemoryQuoteBook::new());
    book.publish(
        Quote::new(InstrumentId::new("2330"), dec!(54.5), dec!(55), dec!(55))
            .with_depth(dec!(52.5), dec!(57.5))
            .with_limits(dec!(60), dec!(50)),
    );
    let nine_am = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let deadline = DeadlineTime::parse("09:01").unwrap();
    let config = ExecutionConfig::builder("2330", OrderSide::Buy, deadline)
        .target_notional(dec!(100000))
        .build()
        .unwrap();

    ExecutionController::initialize(
        config,
        ExecutionPorts {
            quotes: book,
            orders: sink,
            observer: Arc::new(RecordingObserver::new()),
            clock: Arc::new(ManualClock::new(nine_am)),
        },
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_host_runs_execution_to_completion() {
    let (fill_tx, fill_rx) = mpsc::unbounded_channel();
    let sink = Arc::new(PaperOrderSink::with_auto_fill(fill_tx));
    let host = AlgoHost::new(
        controller(Arc::clone(&sink)),
        fill_rx,
        Duration::from_secs(1),
        CancellationToken::new(),
    );

    let report = host.run().await;

    assert!(!report.cancelled);
    assert_eq!(report.ticks, 60);
    assert_eq!(report.fills_forwarded, 2);
    assert_eq!(report.final_snapshot.status, AlgoStatus::Stopped);
    assert_eq!(report.final_snapshot.filled_quantity, 2);
    assert_eq!(report.final_snapshot.orders_placed_count, 2);
    assert_eq!(sink.order_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_host_runs_hook_before_each_tick() {
    let (fill_tx, fill_rx) = mpsc::unbounded_channel();
    let sink = Arc::new(PaperOrderSink::with_auto_fill(fill_tx));
    let hook_calls = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&hook_calls);

    let report = AlgoHost::new(
        controller(sink),
        fill_rx,
        Duration::from_secs(1),
        CancellationToken::new(),
    )
    .with_before_tick(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }))
    .run()
    .await;

    assert_eq!(hook_calls.load(Ordering::SeqCst), report.ticks);
}

#[tokio::test(start_paused = true)]
async fn test_host_stops_on_cancellation() {
    let (_fill_tx, fill_rx) = mpsc::unbounded_channel::<Fill>();
    let sink = Arc::new(PaperOrderSink::new());
    let shutdown = CancellationToken::new();

    let handle = tokio::spawn(
        AlgoHost::new(
            controller(Arc::clone(&sink)),
            fill_rx,
            Duration::from_secs(1),
            shutdown.clone(),
        )
        .run(),
    );

    tokio::time::sleep(Duration::from_millis(10_500)).await;
    shutdown.cancel();
    let report = handle.await.unwrap();

    assert!(report.cancelled);
    assert_eq!(report.ticks, 10);
    assert_eq!(report.final_snapshot.status, AlgoStatus::Stopped);
    assert_eq!(sink.order_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_host_without_fills_completes_on_estimated_notional() {
    let (_fill_tx, fill_rx) = mpsc::unbounded_channel::<Fill>();
    let sink = Arc::new(PaperOrderSink::new());

    let report = AlgoHost::new(
        controller(Arc::clone(&sink)),
        fill_rx,
        Duration::from_secs(1),
        CancellationToken::new(),
    )
    .run()
    .await;

    assert!(!report.cancelled);
    assert_eq!(report.ticks, 61);
    assert_eq!(report.fills_forwarded, 0);
    assert_eq!(report.final_snapshot.filled_quantity, 0);
    assert_eq!(sink.order_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_paper_session_from_yaml() {
    let deadline = (Local::now() + TimeDelta::minutes(10)).format("%H:%M");
    let yaml = format!(
        r#"
algo:
  instrument_id: "2330"
  side: buy
  deadline: "{deadline}"
  target_lots: 2
host:
  tick_interval_ms: 1000
simulation:
  reference_price: 100
  seed: 7
  auto_fill: true
"#
    );
    let config = load_config_from_string(&yaml).unwrap();

    let report = run_paper_session(&config, CancellationToken::new())
        .await
        .unwrap();

    assert!(!report.cancelled);
    assert_eq!(report.fills_forwarded, 2);
    assert_eq!(report.final_snapshot.filled_quantity, 2);
    assert_eq!(report.final_snapshot.status, AlgoStatus::Stopped);
}

#[test]
fn test_config_rejects_notional_without_lots() {
    let yaml = r#"
algo:
  instrument_id: "2330"
  side: sell
  deadline: "13:25"
  target_notional: 0
"#;
    assert!(load_config_from_string(yaml).is_err());
}
