//! File-backed loader tests.

use std::fs;

use rotation_content::{ConfigLoader, ContentFactory, ScenarioLoader};
use rotation_core::{EntityId, HostileKind, Profile};
use tempfile::TempDir;

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("scenarios")).expect("scenarios dir");
    dir
}

#[test]
fn factory_reads_config_and_scenarios_from_disk() {
    let dir = data_dir();
    fs::write(
        dir.path().join("engine.toml"),
        "profile = \"area_of_effect\"\nstop_on_missing = false\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("scenarios/duo.ron"),
        r#"(
            name: "duo",
            catalog: [(action: 11385), (action: 11433)],
            ticks: [
                (
                    world: (
                        actor: (position: (x: 0.0, y: 0.0), is_casting: false, in_combat: true),
                        hostiles: [
                            (id: 3, position: (x: 2.0, y: 0.0), kind: object),
                            (id: 4, position: (x: 5.0, y: 0.0, z: 1.0)),
                        ],
                        current_target: Some(4),
                    ),
                    profile: Some(single_target),
                ),
            ],
        )"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());

    let config = factory.load_config().unwrap();
    assert_eq!(config.profile, Profile::AreaOfEffect);
    assert!(!config.stop_on_missing);

    let scenario = factory.load_scenario("duo").unwrap();
    let tick = &scenario.ticks[0];
    assert_eq!(tick.profile, Some(Profile::SingleTarget));
    assert_eq!(tick.world.current_target, Some(EntityId(4)));
    assert_eq!(tick.world.hostiles[0].kind, HostileKind::Object);
    assert!(tick.world.hostiles[1].is_attackable());
    assert_eq!(tick.world.hostiles[1].position.z, 1.0);
}

#[test]
fn load_errors_name_the_file() {
    let dir = data_dir();
    let path = dir.path().join("engine.toml");
    fs::write(&path, "aoe_threshold = 42\n").unwrap();

    let err = ConfigLoader::load(&path).unwrap_err().to_string();
    assert!(err.contains("engine.toml"), "{err}");

    let missing = ScenarioLoader::load(&dir.path().join("scenarios/none.ron")).unwrap_err();
    assert!(missing.to_string().contains("Failed to read file"));
}

#[test]
fn bundled_data_dir_matches_embedded_copies() {
    let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));

    assert_eq!(factory.load_config().unwrap(), ConfigLoader::embedded().unwrap());
    for name in ScenarioLoader::builtin_names() {
        assert_eq!(
            factory.load_scenario(name).unwrap(),
            ScenarioLoader::builtin(name).unwrap()
        );
    }
}
