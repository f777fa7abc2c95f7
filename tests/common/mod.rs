//! Common test utilities for modcss integration tests
//!
//! Provides a registered store fixture and helpers for seeding theme mods.

#![allow(dead_code)]

use modcss::{CssSection, SectionConfig, ThemeModStore};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture with a temporary directory and a store holding one section
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub store: ThemeModStore,
    pub section: CssSection,
}

impl TestFixture {
    /// `post` section (class selector) with every radius and dimension property
    pub fn new() -> Self {
        Self::with_config(
            SectionConfig::builder("post")
                .title("Post")
                .priority(30)
                .selector(".")
                .border_radius(["all"])
                .dimension(["all"])
                .build()
                .expect("valid section config"),
        )
    }

    /// Fixture for a custom section config; the section is registered
    pub fn with_config(config: SectionConfig) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = ThemeModStore::new();
        let section = CssSection::new(config).expect("Failed to build section");
        section.register(&store).expect("Failed to register section");

        Self {
            temp_dir,
            store,
            section,
        }
    }

    /// Path for persisted theme mods inside the temp dir
    pub fn mods_path(&self) -> PathBuf {
        self.temp_dir.path().join("theme_mods.json")
    }

    /// Set several values, panicking on rejection
    pub fn seed(&self, values: &[(&str, &str)]) {
        for (id, value) in values {
            self.store
                .set(id, *value)
                .unwrap_or_else(|e| panic!("seeding {id}={value}: {e}"));
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read the raw persisted theme mods, if the file exists
pub fn read_mods_file(fixture: &TestFixture) -> Option<Value> {
    let content = std::fs::read_to_string(fixture.mods_path()).ok()?;
    serde_json::from_str(&content).ok()
}
