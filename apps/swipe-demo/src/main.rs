//! Scripted headless session: a short drag that slides home, a full swipe
//! that verifies, then a reset. Frames are paced against the wall clock and
//! every settled frame is logged.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use swipe_verify::prelude::*;
use swipe_verify::Color;
use web_time::Instant;

const HANDLE_SIZE: f32 = 50.0;
const TRACK_WIDTH: f32 = 350.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct Session {
    runtime: Runtime,
    control: SwipeVerify,
    started: Instant,
}

impl Session {
    fn frame_nanos(&self) -> u64 {
        self.started.elapsed().as_nanos() as u64
    }

    /// Runs frames until every animation has settled.
    fn settle(&self) {
        let mut frames = 0usize;
        while self.runtime.has_frame_callbacks() {
            self.runtime.drain_frame_callbacks(self.frame_nanos());
            frames += 1;
            log::trace!("frame {frames}: {:?}", self.control.frame());
            std::thread::sleep(FRAME_INTERVAL);
        }
        let frame = self.control.frame();
        log::info!(
            "settled after {frames} frames: {:?} {}% offset {:.1} fill {:.1} opacity {:.2}",
            frame.status,
            frame.percent,
            frame.handle_offset,
            frame.fill_width,
            frame.handle_opacity
        );
    }

    /// Drags from the handle center to `to_x`, one pointer sample per frame.
    fn drag(&self, to_x: f32, steps: usize) {
        let y = HANDLE_SIZE / 2.0;
        let from_x = HANDLE_SIZE / 2.0;
        self.pointer(PointerEventKind::Down, from_x, y);
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.pointer(PointerEventKind::Move, x, y);
            self.runtime.drain_frame_callbacks(self.frame_nanos());
            std::thread::sleep(FRAME_INTERVAL);
        }
        log::info!("released at {}%", self.control.percent());
        self.pointer(PointerEventKind::Up, to_x, y);
    }

    fn pointer(&self, kind: PointerEventKind, x: f32, y: f32) {
        self.control
            .on_pointer_event(&PointerEvent::new(kind, Point::new(x, y)));
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipe-to-verify headless demo ===");
    println!("Set RUST_LOG=trace to see every frame.");
    println!();

    let config = SwipeVerifyConfig::new(HANDLE_SIZE)
        .with_text("Swipe to verify", Color::WHITE)
        .with_button_color(Color::from_rgb_u8(0x21, 0x96, 0xf3))
        .with_ok_button(false, 300);

    let runtime = Runtime::headless();
    let verified = Rc::new(Cell::new(0u32));
    let control = {
        let verified = Rc::clone(&verified);
        SwipeVerify::new(config, runtime.handle(), move || {
            verified.set(verified.get() + 1);
            log::info!("onVerified fired ({} so far)", verified.get());
        })?
    };
    control.on_layout(Rect::new(0.0, 0.0, TRACK_WIDTH, HANDLE_SIZE));

    let session = Session {
        runtime,
        control,
        started: Instant::now(),
    };

    log::info!("short drag: the handle slides home");
    session.drag(TRACK_WIDTH / 2.0, 12);
    session.settle();

    log::info!("full swipe: the control verifies and the handle fades out");
    session.drag(TRACK_WIDTH + 40.0, 20);
    session.settle();

    log::info!("drag while verified: the handle stays pinned");
    session.drag(TRACK_WIDTH / 3.0, 6);
    session.settle();

    log::info!("reset");
    session.control.reset();
    session.settle();

    anyhow::ensure!(
        verified.get() == 1,
        "expected exactly one verification, got {}",
        verified.get()
    );
    anyhow::ensure!(
        session.control.status() == VerificationStatus::Idle,
        "control did not return to idle"
    );
    println!("Done: verified once, back to idle.");
    Ok(())
}
