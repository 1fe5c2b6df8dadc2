use career_roadmap::config::Config;

#[test]
fn test_config_file_then_env_overrides() {
    let path = std::env::temp_dir().join(format!(
        "career_roadmap_test_{}.toml",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "[generation]\ndelay_ms = 250\n\n[ui]\ntick_ms = 40\ntitle = \"Roadmaps\"\n",
    )
    .unwrap();

    unsafe {
        std::env::set_var("ROADMAP_ENV_FILE", "/nonexistent/.env");
        std::env::set_var("ROADMAP_CONFIG", &path);
        std::env::set_var("ROADMAP_TICK_MS", "75");
        std::env::set_var("ROADMAP_LOG_FILE", "/tmp/career_roadmap.log");
    }

    let config = Config::load().expect("config should load");
    assert_eq!(config.generation.delay_ms, 250);
    assert_eq!(config.ui.tick_ms, 75);
    assert_eq!(config.ui.title, "Roadmaps");
    assert_eq!(
        config.runtime.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/career_roadmap.log"))
    );

    // Missing file falls back to defaults
    unsafe {
        std::env::set_var("ROADMAP_CONFIG", "/nonexistent/career_roadmap.toml");
        std::env::remove_var("ROADMAP_TICK_MS");
    }
    let config = Config::load().expect("defaults should load");
    assert_eq!(config.generation.delay_ms, 1500);
    assert_eq!(config.ui.tick_ms, 100);

    // Invalid override is rejected by validation
    unsafe {
        std::env::set_var("ROADMAP_TICK_MS", "0");
    }
    assert!(Config::load().is_err());

    unsafe {
        std::env::remove_var("ROADMAP_ENV_FILE");
        std::env::remove_var("ROADMAP_CONFIG");
        std::env::remove_var("ROADMAP_TICK_MS");
        std::env::remove_var("ROADMAP_LOG_FILE");
    }
    let _ = std::fs::remove_file(&path);
}
