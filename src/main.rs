//! Fish Frenzy entry point
//!
//! The browser build is driven from JS through `fish_frenzy::web`. Natively
//! this runs headless auto-play sessions and prints a summary, which is handy
//! for balancing a tuning file.
//!
//! Usage: `fish-frenzy [seed] [runs] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fish_frenzy::platform::{CueLog, RecordingSdk};
    use fish_frenzy::sim::TickInput;
    use fish_frenzy::{Scene, Tuning};

    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.first().and_then(|s| s.parse().ok()).unwrap_or(42u64);
    let runs = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1u32);
    let tuning = match args.get(2) {
        Some(path) => match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("Fish Frenzy (native) starting headless auto-play...");

    const DT: f32 = 1.0 / 60.0;
    // Ten minutes of play per run at most
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    let input = TickInput {
        auto_play: true,
        ..Default::default()
    };
    let mut scene = Scene::new(seed, tuning, CueLog::default(), RecordingSdk::default());

    for run in 1..=runs {
        if run > 1 {
            scene.play_again();
        }
        let mut frames = 0;
        while !scene.is_finished() && frames < MAX_FRAMES {
            scene.tick(&input, DT);
            frames += 1;
        }

        let state = scene.state();
        println!(
            "Run {} (seed {}): score {}, {:.1}s, {} fish, best x{}, {} frenzies, {} hits{}",
            run,
            state.seed,
            state.progression.score,
            state.elapsed,
            state.stats.fish_collected,
            state.stats.best_multiplier,
            state.stats.frenzies,
            state.stats.hits_taken,
            if scene.is_finished() { "" } else { " (time cap)" },
        );
    }

    println!("\nLeaderboard:");
    for (i, entry) in scene.high_scores().entries.iter().enumerate() {
        println!(
            "{:>2}. {:>7}  {:>6.1}s  {:>4} fish  x{}",
            i + 1,
            entry.score,
            entry.time_survived,
            entry.fish_collected,
            entry.best_multiplier
        );
    }
    println!("\n{} cues played", scene.audio().played.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is fish_frenzy::web::start, this is just to satisfy the compiler
}
