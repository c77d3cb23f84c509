use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = mini_chess::protocol::run_stdio() {
        log::error!("protocol loop stopped: {e}");
        std::process::exit(1);
    }
}
