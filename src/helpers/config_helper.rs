use crate::config::constants::DEFAULT_OUTPUT_DIR;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_output_dir() -> String {
        DEFAULT_OUTPUT_DIR.to_string()
    }

    pub const fn default_render_email() -> bool {
        true
    }
}
