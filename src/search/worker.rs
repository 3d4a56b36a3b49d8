use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{error, trace};

use super::commands::{SearchCommand, SearchReply};
use crate::service::ScholarshipClient;

/// Launch the background search dispatcher and return its channels.
///
/// The dispatcher itself never blocks on the network: each submit runs on its
/// own request thread so a slow call cannot delay a newer one. Request
/// threads consult `latest_query_id` after their call completes and suppress
/// the reply when a newer submit has been published in the meantime; the
/// session applies the same guard on receipt, so a superseded search can
/// never overwrite newer state from either side.
pub(crate) fn spawn(
    client: ScholarshipClient,
) -> (Sender<SearchCommand>, Receiver<SearchReply>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let dispatcher_latest = Arc::clone(&latest_query_id);

    thread::spawn(move || dispatcher_loop(&client, &command_rx, &reply_tx, &dispatcher_latest));

    (command_tx, reply_rx, latest_query_id)
}

fn dispatcher_loop(
    client: &ScholarshipClient,
    command_rx: &Receiver<SearchCommand>,
    reply_tx: &Sender<SearchReply>,
    latest_query_id: &Arc<AtomicU64>,
) {
    while let Ok(command) = command_rx.recv() {
        match command {
            SearchCommand::Submit { id, request } => {
                let client = client.clone();
                let reply_tx = reply_tx.clone();
                let latest = Arc::clone(latest_query_id);
                thread::spawn(move || {
                    let outcome = client.search(&request);
                    if let Err(err) = &outcome {
                        error!("search {id} failed: {err}");
                    }
                    if latest.load(Ordering::Acquire) != id {
                        trace!("dropping reply for superseded search {id}");
                        return;
                    }
                    let _ = reply_tx.send(SearchReply { id, outcome });
                });
            }
            SearchCommand::Shutdown => break,
        }
    }
}
