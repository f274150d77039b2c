use std::sync::Once;

/// Filter used when neither `RUST_LOG` nor an explicit filter is given
pub const DEFAULT_FILTER: &str = "warn,lookat_camera=info,camera_demo=info";

static INIT: Once = Once::new();

/// Install the `env_logger` backend once; later calls are no-ops
///
/// `RUST_LOG` wins over the default filter; an explicit `filter` wins over
/// both.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(DEFAULT_FILTER),
        );
        if let Some(filter) = filter {
            builder.parse_filters(filter);
        }
        // A test harness may have installed a logger already
        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}
