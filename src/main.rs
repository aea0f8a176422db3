use noughts::config::AppConfig;
use noughts::interface::console::ConsoleInterface;

fn main() {
    env_logger::init();

    let config = AppConfig::load();
    ConsoleInterface::run(&config);
}
