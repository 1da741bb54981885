// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred work: debounced track taps and window resizes.
//!
//! Two quick taps commit only the second position, 200 ms after it. A burst
//! of resizes re-lays the handle out once, a second after the last one. A
//! touch device skips tap-to-position entirely and drags absolutely.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example tap_and_resize`

use understory_slider::SliderConfig;
use understory_slider_demos::{Host, init_tracing};

fn main() {
    init_tracing();

    let config = SliderConfig::new(0, 100).with_value(50);
    let mut host = Host::mount(config, false, 20.0, 400.0);
    println!("mounted      {}", host.render());

    host.click(80.0);
    host.tick(100);
    host.click(300.0);
    println!("tapped       {}", host.render());
    host.tick(250);
    println!("after 350 ms {}  committed {:?}", host.render(), host.committed());

    for width in [360.0, 320.0, 300.0] {
        host.resize(width);
        host.tick(300);
    }
    println!("resizing     {}", host.render());
    host.tick(1_000);
    println!("settled      {}", host.render());
    println!("committed after mouse session: {:?}", host.unmount());

    let mut touch = Host::mount(config, true, 0.0, 300.0);
    let ignored = touch.click(250.0);
    println!("touch tap handled: {}", ignored.handled);
    touch.touch_drag(&[40.0, 120.0, 200.0]);
    println!("touch drag   {}", touch.render());
    println!("committed after touch session: {:?}", touch.unmount());
}
