use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;
use workvisor::{
    labels, Config, ControlError, Event, EventKind, FaultPolicy, HealthDrift, RandomFault,
    Subscribe, Supervisor, WorkerFault, WorkerRecord, WorkerStatus,
};

#[derive(Default)]
struct Recorder(Mutex<Vec<Event>>);

impl Recorder {
    fn kinds(&self) -> Vec<EventKind> {
        self.0.lock().unwrap().iter().map(|e| e.kind).collect()
    }

    fn find(&self, kind: EventKind) -> Option<Event> {
        self.0.lock().unwrap().iter().find(|e| e.kind == kind).cloned()
    }
}

#[async_trait::async_trait]
impl Subscribe for Recorder {
    async fn on_event(&self, ev: &Event) {
        self.0.lock().unwrap().push(ev.clone());
    }
    fn name(&self) -> &'static str {
        "recorder"
    }
}

/// Panics on its first call, then never faults.
#[derive(Default)]
struct PanicOnce(AtomicBool);

impl FaultPolicy for PanicOnce {
    fn check(&self, _worker: &WorkerRecord) -> Result<(), WorkerFault> {
        if !self.0.swap(true, Ordering::SeqCst) {
            panic!("fault policy blew up");
        }
        Ok(())
    }
}

/// Every worker faults on every tick.
struct AlwaysFault;

impl FaultPolicy for AlwaysFault {
    fn check(&self, worker: &WorkerRecord) -> Result<(), WorkerFault> {
        Err(WorkerFault::new(&*worker.id, "simulated outage"))
    }
}

#[tokio::test(start_paused = true)]
async fn degraded_worker_is_recovered_on_next_health_check() {
    let sup = Supervisor::builder(Config::default())
        .with_drift(HealthDrift::none())
        .build()
        .unwrap();
    sup.start().await.unwrap();

    sup.report_fault("code-agent", 40).unwrap();
    let faulted = sup.snapshot();
    let worker = faulted.worker("code-agent").unwrap();
    assert_eq!(worker.status, WorkerStatus::Error);
    assert_eq!(worker.health, 40);
    assert_eq!(worker.error_count, 1);

    // Two work ticks pass first; the errored worker is skipped by both.
    sleep(Duration::from_millis(4_500)).await;
    let worker = sup.snapshot().worker("code-agent").cloned().unwrap();
    assert_eq!(worker.status, WorkerStatus::Error);
    assert_eq!(worker.change_count, 0);

    sleep(Duration::from_millis(501)).await;
    let snap = sup.snapshot();
    let worker = snap.worker("code-agent").unwrap();
    assert_eq!(worker.status, WorkerStatus::Active);
    assert_eq!(worker.health, 75);
    assert_eq!(&*worker.last_activity, labels::AUTO_RECOVERED);
    assert_eq!(worker.error_count, 1);

    assert_eq!(snap.supervisor.system_health, 96.875);
    assert_eq!(snap.mean_health(), Some(snap.supervisor.system_health));

    sup.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn mildly_degraded_worker_stays_in_error() {
    let sup = Supervisor::builder(Config::default()).build().unwrap();
    sup.start().await.unwrap();

    sup.report_fault("ui-agent", 50).unwrap();
    sleep(Duration::from_secs(11)).await;

    let worker = sup.snapshot().worker("ui-agent").cloned().unwrap();
    assert_eq!(worker.status, WorkerStatus::Error);
    assert_eq!(worker.health, 50);

    sup.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pause_and_resume_do_not_clear_error() {
    let sup = Supervisor::builder(Config::default()).build().unwrap();
    sup.start().await.unwrap();
    sup.report_fault("security-agent", 60).unwrap();

    sup.pause().unwrap();
    sup.resume().unwrap();

    let worker = sup.snapshot().worker("security-agent").cloned().unwrap();
    assert_eq!(worker.status, WorkerStatus::Error);
    assert_eq!(worker.error_count, 1);

    sup.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn fault_reported_while_paused_surfaces_on_resume() {
    // Work at 3s, 6s, 9s never coincides with health checks at 5s, 10s.
    let mut cfg = Config::default();
    cfg.work_period = Duration::from_secs(3);

    let sup = Supervisor::builder(cfg)
        .with_drift(HealthDrift::none())
        .build()
        .unwrap();
    sup.start().await.unwrap();
    sup.pause().unwrap();

    sup.report_fault("ui-agent", 80).unwrap();
    sup.report_fault("network-agent", 30).unwrap();
    let paused = sup.snapshot();
    assert!(paused.workers.iter().all(|w| w.status == WorkerStatus::Inactive));
    assert_eq!(paused.worker("ui-agent").unwrap().error_count, 1);
    assert_eq!(paused.worker("network-agent").unwrap().health, 30);

    // A health check while paused must not recover a held worker.
    sleep(Duration::from_millis(5_001)).await;
    let paused = sup.snapshot();
    assert!(paused.workers.iter().all(|w| w.status == WorkerStatus::Inactive));
    assert_eq!(paused.worker("network-agent").unwrap().health, 30);

    sup.resume().unwrap();
    let resumed = sup.snapshot();
    let ui = resumed.worker("ui-agent").unwrap();
    assert_eq!(ui.status, WorkerStatus::Error);
    assert_eq!(ui.health, 80);
    let net = resumed.worker("network-agent").unwrap();
    assert_eq!(net.status, WorkerStatus::Error);
    assert_eq!(net.health, 30);

    // Only the next health check brings the badly degraded one back.
    sleep(Duration::from_secs(5)).await;
    let snap = sup.snapshot();
    assert_eq!(snap.worker("ui-agent").unwrap().status, WorkerStatus::Error);
    let net = snap.worker("network-agent").unwrap();
    assert_eq!(net.status, WorkerStatus::Active);
    assert_eq!(net.health, 75);
    assert_eq!(&*net.last_activity, labels::AUTO_RECOVERED);

    sup.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn reporting_unknown_worker_is_rejected() {
    let sup = Supervisor::builder(Config::default()).build().unwrap();
    sup.start().await.unwrap();
    let before = sup.snapshot();

    assert_eq!(
        sup.report_fault("ghost-agent", 10),
        Err(ControlError::UnknownWorker {
            id: "ghost-agent".into()
        })
    );
    assert_eq!(sup.snapshot(), before);

    sup.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn reporting_fault_while_stopped_is_rejected() {
    let sup = Supervisor::builder(Config::default()).build().unwrap();
    let before = sup.snapshot();

    assert_eq!(
        sup.report_fault("ui-agent", 10),
        Err(ControlError::NotRunning)
    );
    assert_eq!(sup.snapshot(), before);
}

#[tokio::test(start_paused = true)]
async fn panicking_tick_is_isolated_and_reported() {
    let recorder = Arc::new(Recorder::default());
    let sup = Supervisor::builder(Config::default())
        .with_drift(HealthDrift::none())
        .with_faults(PanicOnce::default())
        .with_subscribers(vec![recorder.clone() as Arc<dyn Subscribe>])
        .build()
        .unwrap();
    sup.start().await.unwrap();

    sleep(Duration::from_millis(2_500)).await;
    let snap = sup.snapshot();
    assert_eq!(snap.supervisor.total_changes, 0);
    assert!(snap.workers.iter().all(|w| w.change_count == 0));
    assert!(snap.workers.iter().all(|w| w.status == WorkerStatus::Active));

    let panicked = recorder.find(EventKind::DriverPanicked).unwrap();
    assert_eq!(
        panicked.reason.as_deref(),
        Some("driver=work-cycle panic=fault policy blew up")
    );

    // The driver keeps ticking after the panic.
    sleep(Duration::from_secs(2)).await;
    let snap = sup.snapshot();
    assert_eq!(snap.supervisor.total_changes, 1);
    assert!(snap.workers.iter().all(|w| w.status == WorkerStatus::Working));

    sup.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_lifecycle_and_ticks() {
    let recorder = Arc::new(Recorder::default());
    let sup = Supervisor::builder(Config::default())
        .with_subscribers(vec![recorder.clone() as Arc<dyn Subscribe>])
        .build()
        .unwrap();

    sup.start().await.unwrap();
    sleep(Duration::from_millis(10_500)).await;
    sup.stop().await.unwrap();
    sleep(Duration::from_millis(10)).await;

    let kinds = recorder.kinds();
    assert_eq!(kinds.first(), Some(&EventKind::SupervisorStarted));
    assert_eq!(kinds.last(), Some(&EventKind::SupervisorStopped));
    let count = |k: EventKind| kinds.iter().filter(|&&x| x == k).count();
    assert_eq!(count(EventKind::WorkTick), 5);
    assert_eq!(count(EventKind::HealthChecked), 2);
    assert_eq!(count(EventKind::Heartbeat), 1);

    let seqs: Vec<u64> = recorder.0.lock().unwrap().iter().map(|e| e.seq).collect();
    assert!(seqs.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(start_paused = true)]
async fn faults_then_recovery_under_constant_failure() {
    let mut cfg = Config::default();
    cfg.recovery_threshold = 101;

    let sup = Supervisor::builder(cfg)
        .with_drift(HealthDrift::none())
        .with_faults(AlwaysFault)
        .build()
        .unwrap();
    sup.start().await.unwrap();

    sleep(Duration::from_millis(2_100)).await;
    let snap = sup.snapshot();
    assert_eq!(snap.supervisor.total_changes, 1);
    for w in &snap.workers {
        assert_eq!(w.status, WorkerStatus::Error);
        assert_eq!(w.error_count, 1);
        assert_eq!(w.health, 100);
        assert_eq!(&*w.last_activity, labels::ERROR_OCCURRED);
    }

    // Health check at 5s recovers everyone; the work tick at 6s faults them again.
    sleep(Duration::from_millis(3_000)).await;
    let snap = sup.snapshot();
    assert!(snap.workers.iter().all(|w| w.status == WorkerStatus::Active));
    assert!(snap.workers.iter().all(|w| w.health == 75));

    sleep(Duration::from_secs(1)).await;
    let snap = sup.snapshot();
    assert!(snap.workers.iter().all(|w| w.error_count == 2));

    sup.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn health_stays_in_bounds_under_random_drift_and_faults() {
    let drift = HealthDrift {
        decay_probability: 0.5,
        boost_probability: 0.5,
        step: 40,
    };
    let sup = Supervisor::builder(Config::default())
        .with_drift(drift)
        .with_faults(RandomFault::new(0.2))
        .build()
        .unwrap();
    sup.start().await.unwrap();

    let mut rx = sup.watch();
    for _ in 0..40 {
        rx.changed().await.unwrap();
        let snap = rx.borrow_and_update().clone();
        assert!(snap.workers.iter().all(|w| w.health <= 100));
        assert!((0.0..=100.0).contains(&snap.supervisor.system_health));
    }

    sup.stop().await.unwrap();
}
