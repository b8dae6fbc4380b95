//! Bezier Pinball headless runner
//!
//! Usage: `bezier-pinball [--flatten] [LAYOUT.json] [SETTINGS.json]`
//!
//! Runs one frame of the playfield and prints the draw requests as JSON.
//! Without a layout file the built-in reference table is used.

use std::process::ExitCode;

use bezier_pinball::renderer::DrawList;
use bezier_pinball::renderer::shapes::Flatten;
use bezier_pinball::sim::{FrameReport, Playfield};
use bezier_pinball::{PlayfieldLayout, Result, SimSettings};

struct Args {
    flatten: bool,
    layout: Option<String>,
    settings: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        flatten: false,
        layout: None,
        settings: None,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--flatten" {
            args.flatten = true;
        } else if args.layout.is_none() {
            args.layout = Some(arg);
        } else {
            args.settings = Some(arg);
        }
    }
    args
}

fn run(args: &Args) -> Result<()> {
    let layout = match &args.layout {
        Some(path) => PlayfieldLayout::load(path)?,
        None => PlayfieldLayout::default(),
    };
    let settings = match &args.settings {
        Some(path) => SimSettings::load(path)?,
        None => SimSettings::default(),
    };

    let mut playfield = Playfield::from_layout(&layout, settings)?;

    let (report, draw_list): (FrameReport, DrawList) = if args.flatten {
        let mut sink = Flatten::new(DrawList::new());
        let report = playfield.frame(&mut sink);
        (report, sink.into_inner())
    } else {
        let mut sink = DrawList::new();
        let report = playfield.frame(&mut sink);
        (report, sink)
    };

    for (i, ball) in report.balls.iter().enumerate() {
        log::info!(
            "Ball {}: {} bounces{}, outbound ({:.1}, {:.1})",
            i,
            ball.bounces,
            if ball.exhausted { " (limit reached)" } else { "" },
            ball.outbound().x,
            ball.outbound().y
        );
        for hit in &ball.hits {
            log::info!(
                "  hit obstacle {} at ({:.1}, {:.1}), t={:.3}",
                hit.obstacle,
                hit.point.x,
                hit.point.y,
                hit.root
            );
        }
    }

    log::debug!("Recorded {} draw requests", draw_list.len());
    println!("{}", serde_json::to_string_pretty(&draw_list)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bezier Pinball starting...");

    match run(&parse_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
