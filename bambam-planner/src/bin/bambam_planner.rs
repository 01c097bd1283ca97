use bambam_planner::app::PlannerApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = PlannerApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bambam_planner: {e}");
            std::process::exit(1);
        }
    }
}
