//! Integration test: Load sheet -> Roll -> Quick roll -> Inspect history -> Clear
//!
//! Drives the App state the same way the key handlers do, without a terminal.

use roll_core::{
    Ability, DieType, EncumbranceLevel, ProficiencyLevel, RollMode, RollOutcome, RollerConfig,
    Skill,
};
use roll_tui::app::{App, QuickRoll, Tab};
use std::path::{Path, PathBuf};

fn sample_character() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/character.toml")
}

fn seeded_app(seed: u64, capacity: usize) -> App {
    let mut config = RollerConfig::default();
    config.dice.seed = Some(seed);
    config.history.capacity = capacity;
    let character = roll_core::config::load_character_sheet(&sample_character())
        .expect("sample character should load");
    App::new(config, character)
}

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn print_outcome(outcome: &RollOutcome) {
    println!(
        "  {} {} = {} kept {:?} discarded {:?}",
        outcome.label().unwrap_or("-"),
        outcome.notation(),
        outcome.total(),
        outcome.kept_values(),
        outcome.discarded_values()
    );
}

#[test]
fn test_full_session_flow() {
    separator("1. Load character");
    let mut app = seeded_app(42, 10);
    println!("  {} (level {})", app.character.name, app.character.level);
    assert_eq!(app.character.name, "Mira Thornfield");
    assert_eq!(app.character.proficiency_bonus(), 3);
    assert_eq!(
        app.character.skill_proficiency(Skill::Stealth),
        ProficiencyLevel::Expertise
    );
    assert_eq!(app.character.encumbrance(), EncumbranceLevel::Encumbered);

    separator("2. Roll 3d6+2 from the roller controls");
    app.on_right(); // d20 -> d100
    app.on_left(); // d100 -> d20
    app.die = DieType::D6;
    app.on_up();
    app.on_up();
    app.increase_modifier();
    app.increase_modifier();
    app.on_enter();

    let outcome = app.last_outcome().expect("roll recorded").clone();
    print_outcome(&outcome);
    assert_eq!(outcome.notation(), "3d6+2");
    assert_eq!(outcome.kept_values().len(), 3);
    assert!(outcome.discarded_values().is_empty());
    assert!((5..=20).contains(&outcome.total()));
    assert!(app.status.contains("3d6+2"));

    separator("3. Advantage is ignored off the d20");
    app.cycle_mode();
    assert_eq!(app.mode, RollMode::Advantage);
    app.on_enter();
    let outcome = app.last_outcome().expect("roll recorded");
    print_outcome(outcome);
    assert_eq!(outcome.kept_values().len(), 3);
    assert!(outcome.discarded_values().is_empty());
    assert_eq!(outcome.discarded_sum(), None);

    separator("4. Quick roll a stealth check with advantage");
    app.set_tab(2);
    assert_eq!(app.current_tab, Tab::Character);
    let stealth = app
        .quick_rolls
        .iter()
        .position(|q| *q == QuickRoll::Skill(Skill::Stealth))
        .expect("stealth is listed");
    while app.quick_roll_index < stealth {
        app.on_down();
    }
    app.on_enter();

    let outcome = app.last_outcome().expect("quick roll recorded");
    print_outcome(outcome);
    assert_eq!(outcome.label(), Some("Stealth (Expertise)"));
    assert_eq!(outcome.modifier(), 3 + 2 * 3);
    assert_eq!(outcome.mode(), RollMode::Advantage);
    assert_eq!(outcome.kept_values().len(), 1);
    assert_eq!(outcome.discarded_values().len(), 1);
    assert!(outcome.kept_values()[0] >= outcome.discarded_values()[0]);
    assert_eq!(app.engine.history().len(), 3);

    separator("5. Clear history");
    app.clear_history();
    assert!(app.engine.history().is_empty());
    assert!(app.last_outcome().is_none());
    assert_eq!(app.status, "History cleared.");
}

#[test]
fn test_history_is_bounded_by_config() {
    let mut app = seeded_app(7, 4);
    for _ in 0..10 {
        app.roll().expect("valid roll");
    }
    assert_eq!(app.engine.history().len(), 4);

    // Scrolling stops at the oldest entry
    app.set_tab(1);
    for _ in 0..10 {
        app.on_down();
    }
    assert_eq!(app.history_scroll, 3);
    app.on_enter();
    assert_eq!(app.history_scroll, 0);
}

#[test]
fn test_same_seed_same_rolls() {
    let mut a = seeded_app(1234, 20);
    let mut b = seeded_app(1234, 20);
    for quick in [
        QuickRoll::Check(Ability::Strength),
        QuickRoll::Save(Ability::Dexterity),
        QuickRoll::Skill(Skill::Arcana),
    ] {
        let spec = quick.specification(&a.character);
        let left = a.engine.evaluate(&spec).expect("valid roll");
        let right = b.engine.evaluate(&spec).expect("valid roll");
        assert_eq!(left.kept_values(), right.kept_values());
        assert_eq!(left.total(), right.total());
    }
}

#[test]
fn test_labelled_roll() {
    let mut app = seeded_app(3, 5);
    app.begin_label_edit();
    for c in " Fireball ".chars() {
        app.push_label_char(c);
    }
    app.commit_label();
    assert_eq!(app.label.as_deref(), Some("Fireball"));
    app.die = DieType::D6;
    app.count = 8;
    let outcome = app.roll().expect("valid roll");
    assert_eq!(outcome.label(), Some("Fireball"));
    assert!(app.status.starts_with("Fireball: 8d6 = "));
}

#[test]
fn test_bad_paths_fall_back_to_defaults() {
    let missing = Path::new("/definitely/not/here.toml");
    let app = App::load(Some(missing), Some(missing));
    assert_eq!(app.character.name, "Adventurer");
    assert_eq!(app.die, DieType::D20);
    assert!(app.status.starts_with("Using defaults"));

    let app = App::load(None, Some(&sample_character()));
    assert_eq!(app.character.name, "Mira Thornfield");
    assert_eq!(app.status, "Ready to roll.");
}
