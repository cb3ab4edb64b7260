//! A thread that runs decodes away from the caller's thread.
//!
//! A caller that no longer wants a pending result can drop the receiver, or
//! quit the worker and spawn a fresh one.

use std::{
    sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError},
    time::Duration,
};

use crate::message::{handle_request, DecodeRequest, DecodeResponse};

const WORKER_POLL_TIME_MILLIS: u64 = 50;

struct DecodeJob {
    request: DecodeRequest,
    reply: Sender<DecodeResponse>,
}

pub struct DecodeWorker {
    terminate_sender: Sender<()>,
    job_sender: Sender<DecodeJob>,
    thread_handle: std::thread::JoinHandle<()>,
}

impl DecodeWorker {
    pub fn spawn() -> std::io::Result<Self> {
        let (terminate_tx, terminate_rx) = channel();
        let (job_tx, job_rx) = channel();

        let thread_handle = std::thread::Builder::new()
            .name("nuzsave-decode".to_owned())
            .spawn(|| worker_context(terminate_rx, job_rx))?;

        Ok(DecodeWorker {
            terminate_sender: terminate_tx,
            job_sender: job_tx,
            thread_handle,
        })
    }

    /// Queues a decode. The response arrives on the returned receiver, which is
    /// disconnected without a message if the worker has already exited.
    pub fn submit(&self, request: DecodeRequest) -> Receiver<DecodeResponse> {
        let (reply_tx, reply_rx) = channel();
        if self
            .job_sender
            .send(DecodeJob {
                request,
                reply: reply_tx,
            })
            .is_err()
        {
            log::error!("Decode worker already closed, dropping request");
        }
        reply_rx
    }

    pub fn quit(self) {
        match self.terminate_sender.send(()) {
            Ok(()) => log::info!("Successfully signalled decode worker to exit"),
            Err(_) => log::error!("Decode worker already closed, exiting anyway"),
        }

        match self.thread_handle.join() {
            Ok(()) => log::info!("Decode worker exited"),
            Err(err) => log::error!("Decode worker panicked: {err:?}"),
        }
    }
}

fn worker_context(terminate_rx: Receiver<()>, job_rx: Receiver<DecodeJob>) {
    loop {
        match terminate_rx.try_recv() {
            Ok(()) => {
                log::info!("Decode worker received request to exit");
                break;
            }
            Err(TryRecvError::Disconnected) => {
                log::debug!("Decode worker handle dropped");
                break;
            }
            Err(TryRecvError::Empty) => (),
        }

        match job_rx.recv_timeout(Duration::from_millis(WORKER_POLL_TIME_MILLIS)) {
            Ok(job) => {
                let response = handle_request(&job.request);
                if job.reply.send(response).is_err() {
                    log::debug!("Caller discarded a decode response");
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::debug!("Decode worker job channel closed");
                break;
            }
            Err(RecvTimeoutError::Timeout) => (),
        }
    }
}
