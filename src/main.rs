fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    vibecoder::app::cli::run();
}
