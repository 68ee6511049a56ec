//! End-to-end gameplay scenarios driven through the public API

use fish_frenzy::Scene;
use fish_frenzy::Tuning;
use fish_frenzy::platform::{Cue, CueLog, RecordingSdk};
use fish_frenzy::sim::hazard::HazardPhase;
use fish_frenzy::sim::{
    Category, Entity, EntityKind, FishKind, GameEvent, GamePhase, GameState, TickInput, tick,
};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn idle() -> TickInput {
    TickInput::default()
}

/// Drop `kind` right on the boat and run one frame
fn catch(state: &mut GameState, kind: EntityKind) {
    let pos = state.player.pos();
    state.entities.spawn(Entity::new(kind, pos, Vec2::ZERO));
    tick(state, &idle(), DT);
}

// ── scoring ───────────────────────────────────────────────────────────────────

#[test]
fn ten_blue_fish_score_one_hundred() {
    let mut state = GameState::new(7);
    for _ in 0..10 {
        catch(&mut state, EntityKind::Fish(FishKind::Blue));
    }
    assert_eq!(state.progression.score, 100);
    assert_eq!(state.progression.combo, 10);
    assert_eq!(state.stats.fish_collected, 10);
    assert!(state.entities.is_empty());
}

#[test]
fn golden_fish_triples_following_catches() {
    let mut state = GameState::new(7);
    state.progression.score = 200;

    catch(&mut state, EntityKind::Fish(FishKind::Golden));
    assert_eq!(state.progression.score, 250);
    assert_eq!(state.progression.golden_multiplier, 3);

    catch(&mut state, EntityKind::Fish(FishKind::Blue));
    assert_eq!(state.progression.score, 280);
}

#[test]
fn golden_window_closes() {
    let mut state = GameState::new(7);
    catch(&mut state, EntityKind::Fish(FishKind::Golden));
    for _ in 0..(7.5 / DT) as usize {
        tick(&mut state, &idle(), DT);
        // Keep later waves from landing on the boat
        state.entities.clear();
    }
    assert_eq!(state.progression.golden_multiplier, 1);
    assert_eq!(state.progression.effective_multiplier(), 1);
}

#[test]
fn heart_at_full_lives_is_flat_bonus() {
    let mut state = GameState::new(7);
    state.progression.frenzy_multiplier = 3;
    catch(&mut state, EntityKind::Heart);
    assert_eq!(state.progression.lives, 3);
    assert_eq!(state.progression.score, 50);
}

// ── damage ────────────────────────────────────────────────────────────────────

#[test]
fn trash_costs_a_life_and_the_combo() {
    let mut state = GameState::new(7);
    state.progression.score = 100;
    state.progression.combo = 5;
    state.progression.frenzy_progress = 5;
    state.progression.frenzy_multiplier = 3;

    catch(&mut state, EntityKind::Trash);
    assert_eq!(state.progression.lives, 2);
    assert_eq!(state.progression.combo, 0);
    assert_eq!(state.progression.frenzy_multiplier, 1);
    assert!(state.player.is_invincible());
    assert!((state.player.invincibility.remaining() - 1.0).abs() < 1e-4);
}

#[test]
fn obstacles_pass_through_while_invincible() {
    let mut state = GameState::new(7);
    catch(&mut state, EntityKind::Trash);
    assert_eq!(state.progression.lives, 2);

    // Second hit inside the grace period: no damage, trash stays put
    catch(&mut state, EntityKind::Trash);
    assert_eq!(state.progression.lives, 2);
    assert_eq!(state.entities.count(Category::Falling), 1);

    // Once the grace period runs out the same trash lands
    for _ in 0..70 {
        tick(&mut state, &idle(), DT);
    }
    assert_eq!(state.progression.lives, 1);
}

#[test]
fn shield_blocks_trash() {
    let mut state = GameState::new(7);
    catch(&mut state, EntityKind::Shield);
    assert!(state.player.shielded);
    catch(&mut state, EntityKind::Trash);
    assert_eq!(state.progression.lives, 3);
}

// ── frenzy ────────────────────────────────────────────────────────────────────

#[test]
fn twenty_fish_start_one_frenzy() {
    let mut state = GameState::new(7);
    let mut frenzies = 0;
    for _ in 0..20 {
        catch(&mut state, EntityKind::Fish(FishKind::Blue));
        frenzies += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::FrenzyStarted { .. }))
            .count();
    }
    assert!(state.progression.frenzy_active());
    assert_eq!(state.progression.frenzy_multiplier, 2);
    assert_eq!(state.progression.score, 200);
    assert_eq!(frenzies, 1);

    // Catches during the frenzy do not refill the bar
    for _ in 0..20 {
        catch(&mut state, EntityKind::Fish(FishKind::Blue));
    }
    assert_eq!(state.progression.frenzy_progress, 0);
    assert_eq!(state.stats.frenzies, 1);
}

#[test]
fn frenzy_wipes_the_field() {
    let mut state = GameState::new(7);
    state.progression.score = 150;
    state.progression.frenzy_progress = 19;

    for x in [100.0, 250.0, 400.0, 600.0] {
        state
            .entities
            .spawn(Entity::new(EntityKind::Trash, Vec2::new(x, 100.0), Vec2::ZERO));
    }
    for x in [50.0, 750.0] {
        state.entities.spawn(Entity::new(
            EntityKind::Bird,
            Vec2::new(x, 150.0),
            Vec2::new(0.0, 0.0),
        ));
    }
    state.hazard.phase = HazardPhase::Warning { x: 300.0 };
    state.hazard.warning.start(1.0);

    catch(&mut state, EntityKind::Fish(FishKind::Blue));

    assert!(state.progression.frenzy_active());
    assert!(state.entities.is_empty());
    assert!(state.hazard.warning_x().is_none());
    assert!(state.events.contains(&GameEvent::FrenzyStarted { multiplier: 2 }));
}

// ── hazard ────────────────────────────────────────────────────────────────────

#[test]
fn no_shark_below_score_gate() {
    let mut state = GameState::new(7);
    for _ in 0..(30.0 / DT) as usize {
        tick(&mut state, &TickInput { auto_play: true, ..idle() }, DT);
        if state.progression.score >= 100 {
            break;
        }
        assert!(state.hazard.warning_x().is_none());
        assert_eq!(state.entities.count(Category::Hazard), 0);
    }
}

#[test]
fn warning_precedes_shark() {
    let mut state = GameState::new(7);
    state.progression.score = 500;
    state.hazard.cooldown.start(0.05);

    let mut warned_at = None;
    let mut spawned_at = None;
    for frame in 0..(4.0 / DT) as usize {
        tick(&mut state, &idle(), DT);
        for event in state.drain_events() {
            match event {
                GameEvent::HazardWarning { .. } if warned_at.is_none() => warned_at = Some(frame),
                GameEvent::HazardSpawned { .. } if spawned_at.is_none() => spawned_at = Some(frame),
                _ => {}
            }
        }
    }
    let (warned, spawned) = (warned_at.unwrap(), spawned_at.unwrap());
    let gap = (spawned - warned) as f32 * DT;
    assert!((gap - 1.5).abs() < 3.0 * DT, "warning lasted {}s", gap);
}

// ── scene ─────────────────────────────────────────────────────────────────────

#[test]
fn scene_reports_game_over_once() {
    let mut scene = Scene::new(11, Tuning::default(), CueLog::default(), RecordingSdk::default());
    scene.state_mut().progression.lives = 1;
    let pos = scene.state().player.pos();
    scene
        .state_mut()
        .entities
        .spawn(Entity::new(EntityKind::Trash, pos, Vec2::ZERO));

    scene.tick(&idle(), DT);
    assert_eq!(scene.phase(), GamePhase::GameOver);
    assert!(scene.sdk().reports.is_empty());

    for _ in 0..600 {
        scene.tick(&idle(), DT);
    }
    assert_eq!(scene.phase(), GamePhase::Finished);
    assert_eq!(scene.sdk().reports, vec![0]);
    assert!(scene.audio().played.contains(&Cue::GameOver));
}

#[test]
fn scene_pause_freezes_play() {
    let mut scene = Scene::headless(11);
    let pause = TickInput { pause: true, ..idle() };
    scene.tick(&idle(), DT);
    let elapsed = scene.state().elapsed;

    scene.tick(&pause, DT);
    for _ in 0..60 {
        scene.tick(&idle(), DT);
    }
    assert_eq!(scene.phase(), GamePhase::Paused);
    assert_eq!(scene.state().elapsed, elapsed);

    scene.tick(&pause, DT);
    assert_eq!(scene.phase(), GamePhase::Playing);
}

#[test]
fn auto_play_session_finishes_or_survives() {
    let mut scene = Scene::new(5, Tuning::default(), CueLog::default(), RecordingSdk::default());
    let input = TickInput { auto_play: true, ..idle() };
    for _ in 0..(120.0 / DT) as usize {
        scene.tick(&input, DT);
        let hud = scene.hud();
        assert!(hud.lives <= 3);
        assert!(hud.multiplier >= 1);
    }
    assert!(scene.sdk().reports.len() <= 1);
    assert!(scene.state().elapsed > 0.0);
}
