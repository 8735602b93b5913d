//! Still life demo application
//!
//! Prepares the tabletop scene against the headless backends, renders the
//! configured number of frames and tears everything down again.
//!
//! Usage: `still_life [config.toml|config.ron]`

use still_life::core::{ApplicationConfig, Config, ConfigError};
use still_life::foundation::logging;
use still_life::render::{HeadlessTextures, RecordingShader, ShapeMeshes};
use still_life::scene::{FrameStats, SceneManager};

struct StillLifeApp {
    config: ApplicationConfig,
    scene: SceneManager,
    shader: RecordingShader,
    textures: HeadlessTextures,
    meshes: ShapeMeshes,
}

impl StillLifeApp {
    fn new(config: ApplicationConfig) -> Self {
        let scene = SceneManager::new(&config);
        let textures = HeadlessTextures::new(config.scene.max_texture_units);

        Self {
            config,
            scene,
            shader: RecordingShader::new(),
            textures,
            meshes: ShapeMeshes::new(),
        }
    }

    fn run(&mut self) -> FrameStats {
        let report = self.scene.prepare_scene(&mut self.meshes, &mut self.textures);
        if !report.is_complete() {
            log::warn!(
                "Scene prepared with missing resources: {} meshes and {} textures failed",
                report.meshes_failed,
                report.textures_failed
            );
        }

        let mut last = FrameStats::default();
        for frame in 0..self.config.engine.frames {
            self.shader.clear_history();
            last = self.scene.render_scene(&mut self.shader, &mut self.meshes);
            log::debug!(
                "Frame {}: {} draws, {} triangles, {} uniform writes",
                frame,
                last.draws_issued,
                last.triangles,
                self.shader.write_count()
            );
        }

        last
    }

    fn cleanup(&mut self) {
        self.scene.destroy_textures(&mut self.textures);
        let totals = self.meshes.stats();
        log::info!(
            "Shut down: {} draw calls, {} triangles, {} textures still live",
            totals.draw_calls,
            totals.triangles,
            self.textures.live_count()
        );
    }
}

/// Load the config named on the command line, or defaults when none is given
fn load_config(path: Option<&str>) -> Result<ApplicationConfig, ConfigError> {
    let config = match path {
        Some(path) => ApplicationConfig::load_from_file(path)?,
        None => ApplicationConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref())?;
    logging::init_with_level(&config.engine.log_level);

    log::info!("Starting still life ({} frames)", config.engine.frames);

    let mut app = StillLifeApp::new(config);
    let stats = app.run();
    app.cleanup();

    log::info!(
        "Last frame: {} draws issued, {} failed, {} texture fallbacks",
        stats.draws_issued,
        stats.draws_failed,
        stats.texture_fallbacks
    );

    Ok(())
}
