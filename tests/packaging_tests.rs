// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Checks on the container image recipe.

use std::fs;

fn dockerfile() -> String {
    fs::read_to_string("Dockerfile").expect("Dockerfile should be at the crate root")
}

/// Instructions of the final (runtime) stage.
fn runtime_stage(dockerfile: &str) -> &str {
    let start = dockerfile
        .rfind("\nFROM ")
        .expect("Dockerfile should have a runtime stage");
    &dockerfile[start..]
}

#[test]
fn test_exposes_service_port() {
    let dockerfile = dockerfile();
    let runtime = runtime_stage(&dockerfile);
    assert!(runtime.lines().any(|l| l.trim() == "EXPOSE 8001"));
    assert!(runtime.contains("HOST=0.0.0.0"));
    assert!(runtime.contains("PORT=8001"));
}

#[test]
fn test_runs_server_from_app_dir() {
    let dockerfile = dockerfile();
    let runtime = runtime_stage(&dockerfile);
    assert!(runtime.lines().any(|l| l.trim() == "WORKDIR /app"));
    assert!(runtime.contains("RUN mkdir -p templates"));
    assert_eq!(
        runtime.lines().last().map(str::trim),
        Some("CMD [\"/app/pdf-generation-service\"]")
    );
}

#[test]
fn test_installs_renderer_and_clears_apt_cache() {
    let dockerfile = dockerfile();
    let runtime = runtime_stage(&dockerfile);
    assert!(runtime.contains("chromium"));
    assert!(runtime.contains("rm -rf /var/lib/apt/lists/*"));
    assert!(runtime.contains("RUN /app/render-smoke"));
}
