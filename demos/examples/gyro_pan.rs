// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of the gyro pan widget.
//!
//! Loads an image (one directly, one "fetched"), then feeds a scripted burst
//! of gyro samples through the controller, printing each requested viewport
//! transition. Run with `cargo run -p parallax_demos --example gyro_pan`.

use kurbo::Size;

use parallax_demos::{CannedFetcher, CsvSizeDecoder, DemoGyro, PrintAnimator};
use parallax_layout::StartAnchor;
use parallax_motion::RotationRate;
use parallax_widget::{GyroImageView, SimpleImage};

fn main() {
    let mut view = GyroImageView::new(DemoGyro::default(), PrintAnimator);
    view.set_viewport(Size::new(400.0, 500.0));
    view.set_start_anchor(StartAnchor::Middle);

    println!("== direct image load ==");
    view.set_image(Some(SimpleImage::new(Size::new(1000.0, 500.0))));
    println!("start offset: {:?}", view.offset().unwrap());

    println!("== gyro burst ==");
    let burst = [
        Some(RotationRate::new(0.8, 0.0)),
        Some(RotationRate::new(1.2, 0.0)),
        None, // dropped sample: offset holds
        Some(RotationRate::new(-0.5, 0.3)),
        Some(RotationRate::new(30.0, 0.0)), // slams into the left bound
    ];
    for sample in burst {
        view.on_sample(sample);
    }
    println!("offset after burst: {:?}", view.offset().unwrap());

    println!("== stop / resume ==");
    view.stop_motion();
    view.stop_motion(); // idempotent
    view.start_motion();
    println!("offset unchanged: {:?}", view.offset().unwrap());

    println!("== fetched image swap ==");
    let mut fetcher = CannedFetcher::default();
    fetcher.insert("https://example.com/pano.csv", b"1600,500".to_vec());
    view.request_image("https://example.com/pano.csv", &mut fetcher);
    if view.pump_fetches(&CsvSizeDecoder) {
        println!(
            "swapped to {:?}, offset reset to {:?}",
            view.image().unwrap(),
            view.offset().unwrap()
        );
    }

    println!("== teardown ==");
    view.set_image(None);
    println!("motion active: {}", view.is_motion_active());
}
