// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Byte fetching and the cross-thread completion hand-off.
//!
//! The widget never blocks on the network. [`crate::GyroImageView::request_image`]
//! hands the fetcher a [`FetchReply`]; the fetcher completes on whatever
//! execution context it likes and delivers the bytes (or a failure) through
//! the reply, which pushes them onto a channel owned by the widget. The UI
//! owner later drains that channel on its own thread via
//! [`crate::GyroImageView::pump_fetches`].

use core::fmt;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Error payload for a failed byte fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Creates a fetch error with a human-readable reason.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image fetch failed: {}", self.message)
    }
}

impl core::error::Error for FetchError {}

/// Error payload for bytes that could not be decoded into an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Creates a decode error with a human-readable reason.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image decode failed: {}", self.message)
    }
}

impl core::error::Error for DecodeError {}

/// Fetches bytes from a URL, single attempt, delivered exactly once.
///
/// Implementations may complete synchronously before `fetch` returns or
/// asynchronously from another thread; either way the result goes through
/// the moved [`FetchReply`]. There is no retry and no timeout here; both
/// belong to the implementation.
pub trait ByteFetcher {
    /// Starts fetching `url`, delivering the outcome through `reply`.
    fn fetch(&mut self, url: &str, reply: FetchReply);
}

/// Decodes fetched bytes into the host's image type.
pub trait ImageDecoder<I> {
    /// Decodes `bytes` into an image, or reports why it cannot.
    fn decode(&self, bytes: &[u8]) -> Result<I, DecodeError>;
}

/// One-shot reply handle given to a [`ByteFetcher`].
///
/// Delivery consumes the handle, so a fetch can complete at most once.
/// Dropping the handle without delivering is allowed and simply means the
/// widget never hears back (remaining in its prior state).
#[derive(Debug)]
pub struct FetchReply {
    generation: u64,
    tx: Sender<FetchComplete>,
}

impl FetchReply {
    /// Delivers the fetch outcome to the widget's inbox.
    ///
    /// Completions for a request that has since been superseded are pushed
    /// but discarded at drain time; send failures (widget already gone) are
    /// ignored.
    pub fn deliver(self, result: Result<Vec<u8>, FetchError>) {
        let _ = self.tx.send(FetchComplete {
            generation: self.generation,
            result,
        });
    }
}

pub(crate) struct FetchComplete {
    pub(crate) generation: u64,
    pub(crate) result: Result<Vec<u8>, FetchError>,
}

/// Widget-owned inbox of fetch completions.
///
/// Each `request_image` bumps the generation; drains ignore completions
/// whose generation is not current, so a slow fetch can never clobber a
/// newer request.
pub(crate) struct FetchInbox {
    generation: u64,
    tx: Sender<FetchComplete>,
    rx: Receiver<FetchComplete>,
}

impl FetchInbox {
    pub(crate) fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            generation: 0,
            tx,
            rx,
        }
    }

    /// Registers a new request and returns the reply handle for it.
    pub(crate) fn new_request(&mut self) -> FetchReply {
        self.generation += 1;
        FetchReply {
            generation: self.generation,
            tx: self.tx.clone(),
        }
    }

    /// Drains pending completions, returning the newest successful payload
    /// for the current generation, if any.
    pub(crate) fn drain_current(&mut self) -> Option<Vec<u8>> {
        let mut latest = None;
        while let Ok(complete) = self.rx.try_recv() {
            if complete.generation != self.generation {
                continue;
            }
            if let Ok(bytes) = complete.result {
                latest = Some(bytes);
            }
        }
        latest
    }
}

impl fmt::Debug for FetchInbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchInbox")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
