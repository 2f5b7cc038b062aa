use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Value, json};
use sp_api_client::application::config::Credentials;
use sp_api_client::application::jobs::{
    JobDescriptor, JobQueue, MSG_ALREADY_RUNNING, MSG_ENQUEUED, MessageSink, OrderDetailsOutcome,
    OrderFetcher, get_order_details, order_job_name, schedule_get_order_details,
};
use sp_api_client::application::settings::SpApiSettings;
use sp_api_client::error::AppError;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl MessageSink for RecordingSink {
    fn msgprint(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
struct MockQueue {
    pending: Vec<String>,
    enqueued: Mutex<Vec<JobDescriptor>>,
}

#[async_trait]
impl JobQueue for MockQueue {
    async fn is_job_pending(&self, job_name: &str) -> Result<bool, AppError> {
        Ok(self.pending.iter().any(|name| name == job_name))
    }

    async fn enqueue(&self, job: JobDescriptor) -> Result<(), AppError> {
        self.enqueued.lock().unwrap().push(job);
        Ok(())
    }
}

#[derive(Default)]
struct MockFetcher {
    failing: Option<String>,
    fetched: Mutex<Vec<(String, NaiveDate)>>,
}

#[async_trait]
impl OrderFetcher for MockFetcher {
    async fn get_orders(
        &self,
        settings: &SpApiSettings,
        created_after: NaiveDate,
    ) -> Result<Vec<Value>, AppError> {
        if self.failing.as_deref() == Some(settings.name.as_str()) {
            return Err(AppError::Api {
                code: "HTTP 500".to_string(),
                description: "boom".to_string(),
            });
        }
        self.fetched
            .lock()
            .unwrap()
            .push((settings.name.clone(), created_after));
        Ok(vec![json!({"AmazonOrderId": "111-1"})])
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn settings(name: &str) -> SpApiSettings {
    SpApiSettings::new(
        name,
        Credentials::new("id", "secret", "refresh"),
        date(2026, 10, 1),
    )
}

#[test]
fn test_order_job_name() {
    assert_eq!(order_job_name("Main"), "Get Amazon Orders - Main");
}

#[test]
fn test_job_descriptor_order_fetch() {
    let job = JobDescriptor::order_fetch(&settings("Main"), true);
    assert_eq!(job.job_name, "Get Amazon Orders - Main");
    assert_eq!(job.method, "get_orders");
    assert_eq!(job.settings_name, "Main");
    assert_eq!(job.created_after, date(2026, 10, 1));
    assert_eq!(job.timeout_secs, 4000);
    assert!(job.now);
}

#[tokio::test]
async fn test_get_order_details_enqueues() {
    let queue = MockQueue::default();
    let sink = RecordingSink::default();

    let outcome = get_order_details(&settings("Main"), &queue, &sink, false)
        .await
        .unwrap();

    let enqueued = queue.enqueued.lock().unwrap().clone();
    assert_eq!(enqueued.len(), 1);
    assert_eq!(outcome, OrderDetailsOutcome::Enqueued(enqueued[0].clone()));
    assert!(!enqueued[0].now);
    assert_eq!(*sink.messages.lock().unwrap(), vec![MSG_ENQUEUED.to_string()]);
}

#[tokio::test]
async fn test_get_order_details_already_running() {
    let queue = MockQueue {
        pending: vec!["Get Amazon Orders - Main".to_string()],
        ..MockQueue::default()
    };
    let sink = RecordingSink::default();

    let outcome = get_order_details(&settings("Main"), &queue, &sink, true)
        .await
        .unwrap();

    assert_eq!(outcome, OrderDetailsOutcome::AlreadyRunning);
    assert!(queue.enqueued.lock().unwrap().is_empty());
    assert_eq!(
        *sink.messages.lock().unwrap(),
        vec![MSG_ALREADY_RUNNING.to_string()]
    );
}

#[tokio::test]
async fn test_get_order_details_other_record_pending() {
    let queue = MockQueue {
        pending: vec!["Get Amazon Orders - Other".to_string()],
        ..MockQueue::default()
    };
    let sink = RecordingSink::default();

    let outcome = get_order_details(&settings("Main"), &queue, &sink, false)
        .await
        .unwrap();
    assert!(matches!(outcome, OrderDetailsOutcome::Enqueued(_)));
}

#[tokio::test]
async fn test_get_order_details_inactive() {
    let queue = MockQueue::default();
    let sink = RecordingSink::default();
    let mut record = settings("Main");
    record.is_active = false;

    let outcome = get_order_details(&record, &queue, &sink, false)
        .await
        .unwrap();

    assert_eq!(outcome, OrderDetailsOutcome::Inactive);
    assert!(queue.enqueued.lock().unwrap().is_empty());
    assert_eq!(
        *sink.messages.lock().unwrap(),
        vec!["Please enable the Amazon SP API Settings Main.".to_string()]
    );
}

#[tokio::test]
async fn test_schedule_processes_active_synced_records() {
    let mut inactive = settings("Inactive");
    inactive.is_active = false;
    let mut no_sync = settings("NoSync");
    no_sync.enable_sync = false;
    let mut later = settings("Later");
    later.after_date = date(2026, 10, 15);
    let records = vec![settings("Main"), inactive, no_sync, later];

    let fetcher = MockFetcher::default();
    let processed = schedule_get_order_details(&records, &fetcher).await.unwrap();

    assert_eq!(processed, 2);
    assert_eq!(
        *fetcher.fetched.lock().unwrap(),
        vec![
            ("Main".to_string(), date(2026, 10, 1)),
            ("Later".to_string(), date(2026, 10, 15)),
        ]
    );
}

#[tokio::test]
async fn test_schedule_stops_on_first_error() {
    let records = vec![settings("First"), settings("Broken"), settings("Last")];
    let fetcher = MockFetcher {
        failing: Some("Broken".to_string()),
        ..MockFetcher::default()
    };

    let result = schedule_get_order_details(&records, &fetcher).await;

    assert!(matches!(result, Err(AppError::Api { .. })));
    assert_eq!(fetcher.fetched.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_schedule_with_no_records() {
    let fetcher = MockFetcher::default();
    assert_eq!(schedule_get_order_details(&[], &fetcher).await.unwrap(), 0);
}

#[test]
fn test_get_order_details_blocking() {
    let queue = MockQueue::default();
    let sink = RecordingSink::default();

    let outcome =
        tokio_test::block_on(get_order_details(&settings("Sync"), &queue, &sink, true)).unwrap();

    assert!(matches!(outcome, OrderDetailsOutcome::Enqueued(job) if job.now));
}
