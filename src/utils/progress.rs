use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

pub const SPINNER_FRAMES: [&str; 4] = [".  ", ".. ", "...", "   "];
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(800);

/// 寫入階段的進度步進，總和為 100
pub const WRITE_STEPS: [u64; 3] = [70, 15, 15];
pub const WRITE_PAUSES: [Duration; 2] = [Duration::from_millis(500), Duration::from_millis(300)];

// 轉換期間於背景執行緒顯示的動畫，停止時必定 join 並清除該行
pub struct SpinnerTask {
    pb: ProgressBar,
    stop: Arc<AtomicBool>,
    frames: Arc<AtomicUsize>,
    handle: Option<JoinHandle<()>>,
}

impl SpinnerTask {
    pub fn start(message: &str, hidden: bool) -> Self {
        Self::with_interval(message, hidden, SPINNER_INTERVAL)
    }

    pub fn with_interval(message: &str, hidden: bool, interval: Duration) -> Self {
        let pb = if hidden {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            let mut ticks: Vec<&str> = SPINNER_FRAMES.to_vec();
            ticks.push("");
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{msg}{spinner}")
                    .unwrap()
                    .tick_strings(&ticks),
            );
            pb
        };
        pb.set_message(message.to_string());

        let stop = Arc::new(AtomicBool::new(false));
        let frames = Arc::new(AtomicUsize::new(0));
        let handle = {
            let pb = pb.clone();
            let stop = Arc::clone(&stop);
            let frames = Arc::clone(&frames);
            thread::spawn(move || {
                while !stop.load(Ordering::SeqCst) {
                    pb.tick();
                    frames.fetch_add(1, Ordering::SeqCst);
                    thread::park_timeout(interval);
                }
            })
        };

        SpinnerTask {
            pb,
            stop,
            frames,
            handle: Some(handle),
        }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// 發出停止訊號並等待背景執行緒結束，返回已繪製的影格數
    pub fn stop(mut self) -> usize {
        self.shutdown();
        self.frames.load(Ordering::SeqCst)
    }

    fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.stop.store(true, Ordering::SeqCst);
            handle.thread().unpark();
            if handle.join().is_err() {
                warn!("進度動畫執行緒異常結束");
            }
            self.pb.finish_and_clear();
        }
    }
}

impl Drop for SpinnerTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// 寫入階段的固定步進進度條
pub struct WriteProgress {
    pb: ProgressBar,
    pace: bool,
}

impl WriteProgress {
    pub const TOTAL: u64 = 100;

    pub fn new(message: &str, hidden: bool, pace: bool) -> Self {
        let pb = if hidden {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(Self::TOTAL);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len}%")
                    .unwrap()
                    .progress_chars("##-"),
            );
            pb
        };
        pb.set_message(message.to_string());
        WriteProgress { pb, pace }
    }

    pub fn advance(&self, step: u64) {
        self.pb.inc(step);
    }

    // 純粹的視覺停頓
    pub fn pause(&self, duration: Duration) {
        if self.pace {
            thread::sleep(duration);
        }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.pb.position()
    }

    pub fn finish(&self) {
        self.pb.finish();
    }

    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
