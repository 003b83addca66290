//! Replays a scripted pointer session against a range slider and prints the
//! selected range after each step.
//!
//! ```text
//! RUST_LOG=debug cargo run -p drag_replay -- 0 500
//! ```
//!
//! The two optional arguments are the domain bounds (default `0 10000`).

use anyhow::{Context, Result};
use ranger_core::input::PointerButton;
use ranger_core::{Rect, SceneNode, Size, Vec2};
use ranger_platform::{Window, WindowEvent};
use ranger_ui::{Domain, RangeSlider, RangeSliderArgs};

fn parse_domain() -> Result<Domain> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let bound = |i: usize, default: i32| -> Result<i32> {
        match args.get(i) {
            Some(s) => s
                .parse()
                .with_context(|| format!("domain bound '{s}' is not an integer")),
            None => Ok(default),
        }
    };
    let (min, max) = (bound(0, 0)?, bound(1, 10000)?);
    Ok(Domain::new(min, max)?)
}

fn script() -> Vec<(&'static str, WindowEvent)> {
    let at = |x: f32| WindowEvent::CursorMoved {
        position: Vec2::new(x, 33.0),
    };
    let button = |pressed| WindowEvent::MouseInput {
        pressed,
        button: PointerButton::Primary,
    };
    vec![
        ("hover low thumb", at(33.0)),
        ("grab low thumb", button(true)),
        ("drag low to a quarter", at(120.0)),
        ("try to push low past high", at(400.0)),
        ("release low", button(false)),
        ("hover high thumb", at(407.0)),
        ("grab high thumb", button(true)),
        ("drag high outside the window", WindowEvent::CursorMoved {
            position: Vec2::new(300.0, 200.0),
        }),
        ("release high", button(false)),
        ("widen the window", WindowEvent::Resized(Size::new(600.0, 30.0))),
        ("disable", WindowEvent::Enabled(false)),
        ("grab while disabled", button(true)),
        ("drag while disabled", at(50.0)),
        ("release while disabled", button(false)),
    ]
}

fn main() -> Result<()> {
    env_logger::init();

    let domain = parse_domain()?;
    let slider = RangeSlider::new(
        RangeSliderArgs::default()
            .name("demo")
            .size(400.0, 30.0)
            .domain(domain),
    )
    .on_change(|low, high| log::info!("range changed: {low:.0}..{high:.0}"));

    let mut window = Window::new(
        slider,
        Rect {
            x: 20.0,
            y: 20.0,
            w: 400.0,
            h: 30.0,
        },
    );

    for (label, event) in script() {
        window.handle_event(event);
        let (low, high) = window.widget().values();
        let painted = window.frame().map(|scene| {
            scene
                .nodes
                .iter()
                .filter(|n| matches!(n, SceneNode::Polygon { .. }))
                .count()
        });
        println!(
            "{label:<32} low={low:>8.1} high={high:>8.1} capture={:<5} painted={}",
            window.has_capture(),
            painted.map_or("-".to_string(), |p| format!("{p} glyphs")),
        );
    }

    println!("frames painted: {}", window.frames());
    Ok(())
}
