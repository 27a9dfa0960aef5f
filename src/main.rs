//! dogposture main entrypoint.

use dogposture::run;
use dogposture::ui::messages::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        let category = e.category();
        log::debug!("command failed ({}): {e:?}", category.as_str());
        error(&e);
        std::process::exit(category.exit_code());
    }
}
