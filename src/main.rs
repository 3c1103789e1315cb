use anyhow::Result;
use glam::{Affine3A, Vec3};
use tracing::info;

use ar_placer::utils::logging::init_logging;
use ar_placer::{
    config, LocalScene, PrefabTemplate, SimulatedTracking, TemplateLibrary, TrackedImagePlacer,
    TrackingState,
};

/// Built-in templates used when no settings file is present.
fn demo_library() -> TemplateLibrary {
    TemplateLibrary::new(vec![
        PrefabTemplate::new("Poster", "models/poster_frame.glb"),
        PrefabTemplate::new("Globe", "models/globe.glb").with_scale(0.5),
    ])
}

fn main() -> Result<()> {
    init_logging();
    info!("{} {}", ar_placer::APP_NAME, ar_placer::VERSION);

    let library = match config::load_settings() {
        Some(settings) => {
            info!("loaded template settings from {:?}", config::settings_path());
            settings.library()
        }
        None => demo_library(),
    };
    info!("{} template(s) configured", library.len());

    let mut tracking = SimulatedTracking::new();
    let mut scene = LocalScene::new();
    let mut placer = TrackedImagePlacer::new(library);

    placer.activate(&mut tracking);

    // A scripted tracking session: two known images plus one with no
    // template, then a tracking dropout and recovery, then one removal.
    tracking.report_added("Poster", Affine3A::from_translation(Vec3::new(0.0, 1.2, -0.5)));
    tracking.report_added("Globe", Affine3A::from_translation(Vec3::new(0.4, 0.9, -0.8)));
    tracking.report_added("Unknown", Affine3A::IDENTITY);
    placer.process_pending(&mut scene);
    info!(
        "{} placement(s) after detection, {} scene node(s)",
        placer.placement_count(),
        scene.node_count()
    );

    tracking.report_updated("Poster", TrackingState::Limited);
    placer.process_pending(&mut scene);
    tracking.report_updated("Poster", TrackingState::Tracking);
    placer.process_pending(&mut scene);

    tracking.report_removed("Globe");
    placer.process_pending(&mut scene);
    info!(
        "{} placement(s) after removal, {} scene node(s)",
        placer.placement_count(),
        scene.node_count()
    );

    placer.deactivate(&mut tracking);
    placer.clear(&mut scene);
    Ok(())
}
