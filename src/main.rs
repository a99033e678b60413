use std::path::Path;

use vitrina::assets::FsAssetLoader;
use vitrina::engine::GalleryEngine;
use vitrina::host::HostContext;
use vitrina::surface::NullSurface;

/// Headless demo: resolve a descriptor document, build the scene, and
/// run the animation loop for a fixed number of ticks.
fn run(descriptor_path: &str, ticks: u64) -> Result<(), String> {
    let document = std::fs::read_to_string(descriptor_path)
        .map_err(|e| format!("failed to read {descriptor_path}: {e}"))?;

    let asset_root = Path::new(descriptor_path)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut engine = GalleryEngine::new(
        HostContext::default(),
        NullSurface::new(),
        FsAssetLoader::new(asset_root),
        &document,
    )
    .map_err(|e| format!("failed to build scene: {e}"))?;

    log::info!(
        "built scene: {} mesh groups, {} lights, {} textures pending",
        engine.scene().groups().len(),
        engine.scene().lights().len(),
        engine.pending_assets(),
    );

    for _ in 0..ticks {
        if !engine.tick() {
            break;
        }
    }

    let camera = engine.scene().camera.transform.position;
    log::info!(
        "after {} frames: camera at ({:.2}, {:.2}, {:.2}), {} frames presented",
        engine.frame(),
        camera.x,
        camera.y,
        camera.z,
        engine.surface().presented,
    );

    engine.teardown();
    Ok(())
}

fn main() {
    env_logger::init();

    let descriptor_path = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            log::error!("Usage: vitrina <descriptor.json> [ticks]");
            std::process::exit(1);
        }
    };

    let ticks = match std::env::args().nth(2) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                log::error!("tick count must be an integer, got `{arg}`");
                std::process::exit(1);
            }
        },
        None => 300,
    };

    if let Err(e) = run(&descriptor_path, ticks) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
