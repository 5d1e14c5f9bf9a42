use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

pub fn log_config(level: LevelFilter) -> Result<Config, String> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| e.to_string())
}

pub fn init_logging(level: LevelFilter) -> Result<log4rs::Handle, String> {
    let config = log_config(level)?;
    log4rs::init_config(config).map_err(|e| e.to_string())
}
