use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use indicatif::{
    HumanBytes, HumanDuration, MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle,
};
use url::Url;

pub struct Progress {
    enabled: bool,
    start: Instant,
    max_concurrency: usize,

    // UI
    mp: Option<MultiProgress>,
    stage: ProgressBar,
    downloads: ProgressBar,

    // Counters
    http_in_flight: AtomicU64,
    http_done: AtomicU64,
    http_bytes: AtomicU64,
    last_http_label: Mutex<String>,
}

impl Progress {
    pub fn new(enabled: bool, max_concurrency: usize) -> Arc<Self> {
        let start = Instant::now();

        if !enabled {
            return Arc::new(Self {
                enabled: false,
                start,
                max_concurrency: max_concurrency.max(1),
                mp: None,
                stage: ProgressBar::hidden(),
                downloads: ProgressBar::hidden(),
                http_in_flight: AtomicU64::new(0),
                http_done: AtomicU64::new(0),
                http_bytes: AtomicU64::new(0),
                last_http_label: Mutex::new(String::new()),
            });
        }

        let mp = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());

        let stage = mp.add(ProgressBar::new_spinner());
        stage.set_style(
            ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]").unwrap(),
        );
        stage.enable_steady_tick(Duration::from_millis(80));
        stage.set_message("准备开始");

        let downloads = mp.add(ProgressBar::new_spinner());
        downloads.set_style(
            ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]").unwrap(),
        );
        downloads.enable_steady_tick(Duration::from_millis(120));
        downloads.set_message("下载统计");

        Arc::new(Self {
            enabled: true,
            start,
            max_concurrency: max_concurrency.max(1),
            mp: Some(mp),
            stage,
            downloads,
            http_in_flight: AtomicU64::new(0),
            http_done: AtomicU64::new(0),
            http_bytes: AtomicU64::new(0),
            last_http_label: Mutex::new(String::new()),
        })
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn http_start(&self, url: &Url) {
        self.http_in_flight.fetch_add(1, Ordering::Relaxed);
        if self.enabled {
            if let Ok(mut last) = self.last_http_label.lock() {
                *last = format!("GET {}", url);
            }
            self.refresh_downloads();
        }
    }

    pub fn http_ok(&self, url: &Url, bytes: usize) {
        self.http_in_flight.fetch_sub(1, Ordering::Relaxed);
        self.http_done.fetch_add(1, Ordering::Relaxed);
        self.http_bytes.fetch_add(bytes as u64, Ordering::Relaxed);

        if self.enabled {
            if let Ok(mut last) = self.last_http_label.lock() {
                *last = format!("GET {} ok {}B", url, bytes);
            }
            self.refresh_downloads();
        }
    }

    pub fn http_err(&self, url: &Url) {
        self.http_in_flight.fetch_sub(1, Ordering::Relaxed);
        if self.enabled {
            if let Ok(mut last) = self.last_http_label.lock() {
                *last = format!("GET {} failed", url);
            }
            self.refresh_downloads();
        }
    }

    pub fn finish(&self) {
        if !self.enabled {
            return;
        }
        self.refresh_downloads();
        self.stage.finish_with_message("完成");
        self.downloads.finish_and_clear();
        if let Some(mp) = &self.mp {
            // Best effort: ensure the last render flushes.
            let _ = mp.println(format!("Done in {}", HumanDuration(self.start.elapsed())));
        }
    }

    fn refresh_downloads(&self) {
        if !self.enabled {
            return;
        }

        let in_flight = self.http_in_flight.load(Ordering::Relaxed);
        let done = self.http_done.load(Ordering::Relaxed);
        let bytes = self.http_bytes.load(Ordering::Relaxed);

        let last = self
            .last_http_label
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default();
        self.downloads.set_message(format!(
            "HTTP: done {done} | in-flight {in_flight}/{max} | bytes {bytes} | {last}",
            max = self.max_concurrency,
            bytes = HumanBytes(bytes),
        ));
    }
}
