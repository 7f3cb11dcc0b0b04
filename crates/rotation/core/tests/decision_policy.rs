//! Decision policy tests
//!
//! Exercises both entry points against hand-built snapshots and catalogs:
//! combat preconditions, gating, target selection, the AoE threshold and the
//! weave waterfall.

use std::collections::HashMap;

use rotation_core::spellbook::{
    AQUA_BREATH, FLAMETHROWER, MOON_FLUTE, SONIC_BOOM, SURPANAKHA, WATER_CANNON,
};
use rotation_core::{
    ActionId, ActionRef, ActorView, AoeThreshold, Availability, CapabilityCatalog, EngineConfig,
    EntityId, Hostile, NoBaseWeave, Position, Profile, RotationEngine, TargetPolicy,
    WorldSnapshot, count_in_radius, engine, select_target, spellbook,
};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Default)]
struct TestCatalog {
    entries: HashMap<ActionId, Availability>,
}

impl TestCatalog {
    fn all_ready() -> Self {
        let mut catalog = Self::default();
        for action in spellbook::ALL {
            catalog.entries.insert(action.id, Availability::READY);
        }
        catalog
    }

    fn with(mut self, action: ActionRef, availability: Availability) -> Self {
        self.entries.insert(action.id, availability);
        self
    }

    fn without(mut self, action: ActionRef) -> Self {
        self.entries.remove(&action.id);
        self
    }
}

impl CapabilityCatalog for TestCatalog {
    fn try_get(&self, id: ActionId) -> Option<Availability> {
        self.entries.get(&id).copied()
    }
}

fn actor() -> ActorView {
    ActorView::new(Position::ORIGIN).engaged()
}

/// Actor at the origin, target 10 yalms away, plus `extra` enemies packed
/// around the target.
fn pack(extra: u32) -> WorldSnapshot {
    let target = Position::flat(10.0, 0.0);
    let mut world = WorldSnapshot::new(actor()).with_hostile(Hostile::enemy(1, target));
    for i in 0..extra {
        let offset = 1.0 + i as f32;
        world = world.with_hostile(Hostile::enemy(2 + i, Position::flat(10.0, offset)));
    }
    world
}

fn aoe_config(threshold: i64) -> EngineConfig {
    EngineConfig::new()
        .with_profile(Profile::AreaOfEffect)
        .with_aoe_threshold(AoeThreshold::new(threshold).expect("valid threshold"))
}

fn hook_returning(action: ActionRef) -> impl Fn() -> Option<ActionRef> + Send + Sync {
    move || Some(action)
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn out_of_combat_yields_nothing() {
    let world = WorldSnapshot::new(ActorView::new(Position::ORIGIN))
        .with_hostile(Hostile::enemy(1, Position::flat(3.0, 0.0)));
    let catalog = TestCatalog::all_ready();
    let mut engine = RotationEngine::with_weave_hook(hook_returning(WATER_CANNON));

    for profile in [Profile::SingleTarget, Profile::AreaOfEffect] {
        let config = EngineConfig::new().with_profile(profile);
        assert_eq!(engine.decide_main_cycle(&config, &world, &catalog), None);
        assert_eq!(engine.decide_weave(&config, &world, &catalog), None);
    }
}

#[test]
fn no_hostiles_in_range_yields_nothing() {
    let world = WorldSnapshot::new(actor()).with_hostile(Hostile::enemy(1, Position::flat(40.0, 0.0)));
    let catalog = TestCatalog::all_ready();
    let mut engine = RotationEngine::new();

    assert_eq!(engine.decide_main_cycle(&EngineConfig::new(), &world, &catalog), None);
    assert_eq!(engine.decide_weave(&EngineConfig::new(), &world, &catalog), None);
}

// ============================================================================
// Gating
// ============================================================================

#[test]
fn hard_stop_withholds_everything_while_requirements_are_missing() {
    let world = pack(4);
    let mut engine = RotationEngine::with_weave_hook(hook_returning(WATER_CANNON));

    let catalogs = [
        TestCatalog::all_ready().with(MOON_FLUTE, Availability::LOCKED),
        TestCatalog::all_ready().without(SONIC_BOOM),
        TestCatalog::default(),
    ];

    for catalog in &catalogs {
        let config = EngineConfig::new();
        assert_eq!(engine.decide_main_cycle(&config, &world, catalog), None);
        assert_eq!(engine.decide_weave(&config, &world, catalog), None);
        assert!(engine.diagnostics().gating_active);
    }
}

#[test]
fn soft_stop_returns_the_fallback_verbatim() {
    let world = pack(0);
    let catalog = TestCatalog::all_ready().with(MOON_FLUTE, Availability::LOCKED);
    let mut config = EngineConfig::new();
    config.stop_on_missing = false;

    let mut engine = RotationEngine::new();
    assert_eq!(
        engine.decide_main_cycle(&config, &world, &catalog),
        Some(WATER_CANNON)
    );
    assert_eq!(engine.decide_weave(&config, &world, &catalog), Some(WATER_CANNON));
    assert!(engine.diagnostics().gating_active);
    assert_eq!(engine.diagnostics().summary, "Missing spells: Moon Flute");
}

#[test]
fn soft_stop_fallback_weaves_before_the_combat_check() {
    let world = WorldSnapshot::new(ActorView::new(Position::ORIGIN))
        .with_hostile(Hostile::enemy(1, Position::flat(3.0, 0.0)));
    let catalog = TestCatalog::all_ready().with(MOON_FLUTE, Availability::LOCKED);
    let mut config = EngineConfig::new();
    config.stop_on_missing = false;

    let mut engine = RotationEngine::new();
    assert_eq!(engine.decide_main_cycle(&config, &world, &catalog), None);
    assert_eq!(engine.decide_weave(&config, &world, &catalog), Some(WATER_CANNON));
    assert!(engine.diagnostics().gating_active);
}

#[test]
fn soft_stop_without_usable_fallback_yields_nothing() {
    let world = pack(0);
    let catalog = TestCatalog::all_ready()
        .with(MOON_FLUTE, Availability::LOCKED)
        .with(WATER_CANNON, Availability::ON_COOLDOWN);
    let mut config = EngineConfig::new();
    config.stop_on_missing = false;

    let decision = engine::main_cycle(&config, &world, &catalog);
    assert_eq!(decision.action, None);
    assert!(decision.diagnostics.gating_active);
}

#[test]
fn everything_missing_reports_every_name() {
    let world = pack(0);
    let catalog = TestCatalog::default();
    let mut engine = RotationEngine::new();
    let config = EngineConfig::new();

    assert_eq!(engine.decide_main_cycle(&config, &world, &catalog), None);
    assert_eq!(engine.decide_weave(&config, &world, &catalog), None);

    let diagnostics = engine.diagnostics();
    assert!(diagnostics.gating_active);
    assert_eq!(
        diagnostics.missing_spells,
        ["Water Cannon", "Sonic Boom", "Moon Flute"]
    );
    assert_eq!(
        diagnostics.summary,
        "Missing spells: Water Cannon, Sonic Boom, Moon Flute"
    );
}

#[test]
fn diagnostics_refresh_even_without_a_target() {
    let world = WorldSnapshot::new(ActorView::new(Position::ORIGIN));
    let catalog = TestCatalog::all_ready().with(SONIC_BOOM, Availability::LOCKED);

    let decision = engine::main_cycle(&EngineConfig::new(), &world, &catalog);
    assert_eq!(decision.action, None);
    assert_eq!(decision.diagnostics.missing_spells, ["Sonic Boom"]);
}

// ============================================================================
// Targeting
// ============================================================================

#[test]
fn nearest_hostile_within_range_is_selected() {
    let world = WorldSnapshot::new(actor())
        .with_hostile(Hostile::enemy(1, Position::flat(3.0, 0.0)))
        .with_hostile(Hostile::enemy(2, Position::flat(30.0, 0.0)));

    let first = select_target(&world, EngineConfig::ENGAGEMENT_RANGE).map(|h| h.id);
    let second = select_target(&world, EngineConfig::ENGAGEMENT_RANGE).map(|h| h.id);

    assert_eq!(first, Some(EntityId(1)));
    assert_eq!(first, second);
}

#[test]
fn current_target_policy_never_retargets() {
    let mut config = EngineConfig::new();
    config.target_policy = TargetPolicy::CurrentTarget;
    let catalog = TestCatalog::all_ready();
    let nearby = Hostile::enemy(1, Position::flat(3.0, 0.0));

    let tracked_far = WorldSnapshot::new(actor())
        .with_hostile(nearby)
        .with_hostile(Hostile::enemy(2, Position::flat(30.0, 0.0)))
        .with_current_target(EntityId(2));
    assert_eq!(engine::main_cycle(&config, &tracked_far, &catalog).action, None);

    let tracked_dead = WorldSnapshot::new(actor())
        .with_hostile(nearby)
        .with_hostile(Hostile::enemy(2, Position::flat(6.0, 0.0)).dead())
        .with_current_target(EntityId(2));
    assert_eq!(engine::main_cycle(&config, &tracked_dead, &catalog).action, None);

    let tracked_live = WorldSnapshot::new(actor())
        .with_hostile(nearby)
        .with_hostile(Hostile::enemy(2, Position::flat(12.0, 0.0)))
        .with_current_target(EntityId(2));
    assert_eq!(
        engine::main_cycle(&config, &tracked_live, &catalog).action,
        Some(SONIC_BOOM)
    );

    config.target_policy = TargetPolicy::NearestHostile;
    assert_eq!(
        engine::main_cycle(&config, &tracked_far, &catalog).action,
        Some(SONIC_BOOM)
    );
}

// ============================================================================
// Area of effect
// ============================================================================

#[test]
fn aoe_branch_opens_at_threshold() {
    let world = pack(2);
    assert_eq!(count_in_radius(Position::flat(10.0, 0.0), 8.0, &world), 3);

    let mut engine = RotationEngine::new();
    let catalog = TestCatalog::all_ready();
    assert_eq!(
        engine.decide_main_cycle(&aoe_config(3), &world, &catalog),
        Some(FLAMETHROWER)
    );
}

#[test]
fn aoe_branch_one_below_threshold_falls_to_single_target() {
    let world = pack(1);
    let catalog = TestCatalog::all_ready();

    let decision = engine::main_cycle(&aoe_config(3), &world, &catalog);
    assert_eq!(decision.action, Some(SONIC_BOOM));
}

#[test]
fn aoe_branch_uses_declared_order_then_falls_through() {
    let world = pack(5);
    let config = aoe_config(2);

    let catalog = TestCatalog::all_ready().with(FLAMETHROWER, Availability::ON_COOLDOWN);
    assert_eq!(
        engine::main_cycle(&config, &world, &catalog).action,
        Some(SURPANAKHA)
    );

    let catalog = catalog.with(SURPANAKHA, Availability::ON_COOLDOWN);
    assert_eq!(
        engine::main_cycle(&config, &world, &catalog).action,
        Some(SONIC_BOOM)
    );
}

#[test]
fn single_target_profile_ignores_packs() {
    let world = pack(6);
    let catalog = TestCatalog::all_ready();

    let decision = engine::main_cycle(&EngineConfig::new(), &world, &catalog);
    assert_eq!(decision.action, Some(SONIC_BOOM));
}

// ============================================================================
// Weave
// ============================================================================

#[test]
fn weave_prefers_offensive_then_defensive() {
    let world = pack(0);
    let config = EngineConfig::new();

    let catalog = TestCatalog::all_ready();
    assert_eq!(
        engine::weave(&config, &world, &catalog, &NoBaseWeave).action,
        Some(MOON_FLUTE)
    );

    let mut config = config;
    config.offensive_weaves = false;
    assert_eq!(
        engine::weave(&config, &world, &catalog, &NoBaseWeave).action,
        Some(AQUA_BREATH)
    );
}

#[test]
fn casting_actor_defers_to_the_base_hook() {
    let world = WorldSnapshot::new(actor().casting())
        .with_hostile(Hostile::enemy(1, Position::flat(4.0, 0.0)));
    let catalog = TestCatalog::all_ready();
    let config = EngineConfig::new();

    let mut engine = RotationEngine::with_weave_hook(hook_returning(SONIC_BOOM));
    assert_eq!(engine.decide_weave(&config, &world, &catalog), Some(SONIC_BOOM));

    let mut engine = RotationEngine::new();
    assert_eq!(engine.decide_weave(&config, &world, &catalog), None);
}
