fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start tokio runtime: {}", e);
            std::process::exit(1);
        }
    };
    rt.block_on(movie_catalog::run());
}
