// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider session basics.
//!
//! Mount a 2..30 slider on a 280 px track, step it with the keyboard, drag it
//! past the end with the mouse, and print the track after every gesture.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_session`
//! - `RUST_LOG=understory_slider=trace cargo run -p understory_slider_demos --example slider_session`

use ui_events::keyboard::NamedKey;
use understory_slider::SliderConfig;
use understory_slider_demos::{Host, init_tracing};

fn main() {
    init_tracing();

    let config = SliderConfig::new(2, 30)
        .with_value(10)
        .with_tick_marks(true);
    let mut host = Host::mount(config, false, 0.0, 280.0);
    println!("mounted     {}", host.render());

    host.press(NamedKey::ArrowRight, 1);
    println!("arrow right {}", host.render());

    host.press(NamedKey::ArrowLeft, 3);
    println!("arrow left  {}", host.render());

    let start = host.handle_center();
    host.mouse_drag(&[start + 40.0, start + 120.0, start + 1_000.0]);
    println!("mouse drag  {}", host.render());

    let start = host.handle_center();
    host.mouse_drag(&[start - 2_000.0]);
    println!("drag to min {}", host.render());

    let committed = host.unmount();
    println!("committed: {committed:?}");
}
