//! Process lifecycle management: spawning makemkvcon and exposing its
//! output as a lazy, cancelable stream of parsed lines.
//!
//! A dedicated reader thread parses stdout and feeds a bounded channel; the
//! consumer pulls elements from the channel at its own pace. After stdout is
//! exhausted the thread reaps the child with a bounded grace period and
//! reports a non-zero exit (or wait timeout) as a final error element. A
//! watcher thread kills the child when the caller's [`CancelToken`] fires,
//! which unblocks any pending read and ends the stream promptly.

use crate::error::{CoreError, CoreResult};
use crate::protocol::{parse_lines, Line};
use std::io::BufReader;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, SyncSender};
use std::sync::{mpsc, Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

/// Grace period between stdout closing (or cancellation) and giving up on a
/// clean child exit.
const WAIT_GRACE: Duration = Duration::from_secs(1);

/// Interval for the polling loops that watch for cancellation and exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Bound on lines buffered ahead of the consumer.
const CHANNEL_CAPACITY: usize = 64;

/// A cancellation signal shared between a caller and a running operation.
/// Cloning yields a handle to the same signal.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation. The running operation terminates its child
    /// process and ends its line stream promptly.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// A lazy, in-order, non-restartable sequence of parsed output lines from a
/// running child process.
///
/// Per-line parse failures are yielded as recoverable errors and do not end
/// the sequence. A read failure, a non-zero exit, a wait timeout, or
/// cancellation is yielded as a final element after all output lines.
/// Dropping the stream early terminates the child without blocking.
pub struct LineStream {
    rx: Receiver<CoreResult<Line>>,
    child: Arc<Mutex<Child>>,
    shutdown: Arc<AtomicBool>,
}

impl Iterator for LineStream {
    type Item = CoreResult<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rx.recv().ok()
    }
}

impl Drop for LineStream {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        let _ = lock(&self.child).kill();
    }
}

/// Spawns `command` with stdout captured and returns the stream of parsed
/// lines. `tool` names the process in errors.
pub(crate) fn spawn(mut command: Command, tool: &str, cancel: &CancelToken) -> CoreResult<LineStream> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    log::debug!("running command: {command:?}");
    let mut child = command.spawn().map_err(|source| CoreError::CommandStart {
        tool: tool.to_string(),
        source,
    })?;
    let stdout = child.stdout.take().unwrap();

    let child = Arc::new(Mutex::new(child));
    let shutdown = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::sync_channel(CHANNEL_CAPACITY);

    spawn_watcher(Arc::clone(&child), cancel.clone(), Arc::clone(&shutdown));
    spawn_reader(
        Arc::clone(&child),
        stdout,
        tx,
        cancel.clone(),
        Arc::clone(&shutdown),
        tool.to_string(),
    );

    Ok(LineStream {
        rx,
        child,
        shutdown,
    })
}

/// Kills the child once the cancel token fires, unblocking the reader.
fn spawn_watcher(child: Arc<Mutex<Child>>, cancel: CancelToken, shutdown: Arc<AtomicBool>) {
    thread::spawn(move || loop {
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        if cancel.is_canceled() {
            let _ = lock(&child).kill();
            break;
        }

        thread::sleep(POLL_INTERVAL);
    });
}

/// Parses stdout line by line into the channel, then reports the child's
/// exit condition as a final element.
fn spawn_reader(
    child: Arc<Mutex<Child>>,
    stdout: std::process::ChildStdout,
    tx: SyncSender<CoreResult<Line>>,
    cancel: CancelToken,
    shutdown: Arc<AtomicBool>,
    tool: String,
) {
    thread::spawn(move || {
        let mut receiver_gone = false;
        for item in parse_lines(BufReader::new(stdout)) {
            if tx.send(item).is_err() {
                receiver_gone = true;
                break;
            }
        }

        if receiver_gone {
            // Consumer stopped listening; do not let the child linger.
            let _ = lock(&child).kill();
        }

        let exit = wait_with_grace(&child, &tool);
        shutdown.store(true, Ordering::SeqCst);
        if receiver_gone {
            return;
        }

        match exit {
            Ok(status) if status.success() => {}
            Ok(status) => {
                let err = if cancel.is_canceled() {
                    CoreError::Canceled
                } else {
                    CoreError::CommandFailed { tool, status }
                };
                let _ = tx.send(Err(err));
            }
            Err(err) => {
                let _ = tx.send(Err(err));
            }
        }
    });
}

/// Waits for the child to exit, killing it if the grace period elapses.
fn wait_with_grace(child: &Mutex<Child>, tool: &str) -> CoreResult<ExitStatus> {
    let deadline = Instant::now() + WAIT_GRACE;
    loop {
        {
            let mut child = lock(child);
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CoreError::CommandWait {
                    tool: tool.to_string(),
                });
            }
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn lock(child: &Mutex<Child>) -> MutexGuard<'_, Child> {
    match child.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
