// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared collaborator fakes for the Parallax demos.
//!
//! Real hosts wrap a platform sensor driver, a rendering-side animator, and
//! an HTTP client. The demos replace all three with small in-process stand-ins
//! so the full widget cascade can run headlessly in a terminal.

use std::collections::HashMap;

use kurbo::{Point, Size};

use parallax_motion::{GyroSource, PanAnimator};
use parallax_widget::{ByteFetcher, DecodeError, FetchError, FetchReply, ImageDecoder, SimpleImage};

/// A gyro source that just tracks its subscription state.
///
/// The demos drive samples by hand, so the "stream" is nothing more than the
/// active flag the controller flips on and off.
#[derive(Debug, Default)]
pub struct DemoGyro {
    active: bool,
}

impl GyroSource for DemoGyro {
    fn start_sampling(&mut self, interval: f64) {
        self.active = true;
        println!("[gyro] sampling every {interval}s");
    }

    fn stop_sampling(&mut self) {
        if self.active {
            println!("[gyro] stopped");
        }
        self.active = false;
    }

    fn is_sampling(&self) -> bool {
        self.active
    }
}

/// An animator that prints each requested transition.
#[derive(Debug, Default)]
pub struct PrintAnimator;

impl PanAnimator for PrintAnimator {
    fn animate_to(&mut self, target: Point, duration: f64) {
        println!(
            "[animator] glide to ({:.1}, {:.1}) over {duration}s",
            target.x, target.y
        );
    }
}

/// A fetcher serving canned bytes keyed by URL, completing inline.
///
/// Unknown URLs fail the way a dead link would.
#[derive(Debug, Default)]
pub struct CannedFetcher {
    responses: HashMap<String, Vec<u8>>,
}

impl CannedFetcher {
    /// Registers the bytes served for `url`.
    pub fn insert(&mut self, url: impl Into<String>, bytes: Vec<u8>) {
        self.responses.insert(url.into(), bytes);
    }
}

impl ByteFetcher for CannedFetcher {
    fn fetch(&mut self, url: &str, reply: FetchReply) {
        match self.responses.get(url) {
            Some(bytes) => reply.deliver(Ok(bytes.clone())),
            None => reply.deliver(Err(FetchError::new(format!("no response for {url}")))),
        }
    }
}

/// Decodes `"width,height"` text into a [`SimpleImage`].
#[derive(Debug, Default)]
pub struct CsvSizeDecoder;

impl ImageDecoder<SimpleImage> for CsvSizeDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<SimpleImage, DecodeError> {
        let text = str::from_utf8(bytes).map_err(|e| DecodeError::new(e.to_string()))?;
        let (w, h) = text
            .split_once(',')
            .ok_or_else(|| DecodeError::new("expected \"width,height\""))?;
        let parse = |s: &str| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| DecodeError::new(e.to_string()))
        };
        Ok(SimpleImage::new(Size::new(parse(w)?, parse(h)?)))
    }
}
