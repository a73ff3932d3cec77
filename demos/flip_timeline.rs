use cardflip::{FlipController, parse_flip_params};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let params = serde_json::json!({
        "duration": 0.6,
        "background": [16, 16, 18],
    });
    let config = parse_flip_params("flip", &params)?;
    let mut controller = FlipController::new(config)?;

    controller.set_flipped(true, 0.0);
    for step in 0..=6 {
        let now = f64::from(step) * 0.1;
        controller.advance_to(now);
        let snap = controller.snapshot(now, 320.0);
        println!(
            "t={now:.1} phase={:?} front(visible={} progress={:.2}) back(visible={} progress={:.2})",
            controller.phase(now),
            snap.front.visible,
            snap.front.progress,
            snap.back.visible,
            snap.back.progress,
        );
    }

    Ok(())
}
