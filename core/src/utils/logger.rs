use std::fmt::Display;

pub fn info(message: impl Display) {
    log::info!("{}", message);
}

pub fn warn(message: impl Display) {
    log::warn!("{}", message);
}

pub fn error(message: impl Display) {
    log::error!("{}", message);
}

pub fn debug(message: impl Display) {
    log::debug!("{}", message);
}
