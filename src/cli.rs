// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::DemoConfig;
use crate::demo::DemoVariant;
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-demo")]
#[command(about = "Look-at camera demo: drag to orbit, right-drag to pan, wheel to dolly", long_about = None)]
pub struct Cli {
    /// Scene to render
    #[arg(long, value_enum, default_value_t = DemoVariant::Cubes)]
    pub demo: DemoVariant,

    /// JSON file with camera, controller and debounce settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Far clip plane, overriding the scene default and the config file
    #[arg(long)]
    pub far: Option<f32>,

    /// Disable the parameter pane
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Log filter, e.g. `debug` or `lookat_camera=trace` (overrides RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    ///
    /// Without a config file the far plane follows the selected scene.
    pub fn resolve_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => {
                let mut config = DemoConfig::default();
                config.camera.far = self.demo.far_plane();
                config
            }
        };

        if let Some(far) = self.far {
            config.camera.far = far;
        }
        Ok(config)
    }
}
