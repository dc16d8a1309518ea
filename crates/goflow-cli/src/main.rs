mod cli;
mod commands;
mod logging;

use cli::{TranslateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init_tracing();

    let params = TranslateParams::from_matches(&matches);
    commands::translate::run(params.into());
}
