use clap::Parser;
use seismap::app::SeismapApp;

fn main() {
    env_logger::init();
    let args = SeismapApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running seismap: {e}");
            std::process::exit(1);
        }
    }
}
